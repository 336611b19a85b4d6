//! Key casing repair for patches read through case-folding sources.

use hive_domain::{SettingsPatch, UpdateKind, lookup_key};
use serde_json::{Map, Value};

/// A recased patch that no longer decodes.
#[derive(Debug)]
pub(super) struct RecaseError {
    /// Comma-separated wire names that were recased
    pub keys: String,
    pub reason: String,
}

/// Restore registry casing on keys that reached `patch` case-folded.
///
/// Environment variables arrive lowercased (`LLMHIVE_SESSION__REASONINGMODE`
/// becomes `reasoningmode`) and would otherwise be kept as unknown keys.
/// Members of nested records are recased through their dotted registry
/// entries and laid over the record the patch already carries. Recased
/// values win over their camelCase twins.
pub(super) fn recase_patch(patch: &SettingsPatch) -> Result<SettingsPatch, RecaseError> {
    let mut extra = patch.extra.clone();
    let mut recased = Map::new();
    extra.retain(|key, value| match lookup_key(key) {
        Some(info) if info.kind != UpdateKind::NestedField && info.key != key.as_str() => {
            recased.insert(info.key.to_string(), recase_members(info.key, value.clone()));
            false
        }
        _ => true,
    });
    if recased.is_empty() {
        return Ok(patch.clone());
    }

    let keys = recased.keys().cloned().collect::<Vec<_>>().join(", ");
    let fail = |e: serde_json::Error| RecaseError {
        keys: keys.clone(),
        reason: e.to_string(),
    };

    let base = SettingsPatch {
        extra,
        ..patch.clone()
    };
    let mut merged = match serde_json::to_value(&base).map_err(fail)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, value) in recased {
        match value {
            Value::Object(members) if merged.get(&key).is_some_and(Value::is_object) => {
                if let Some(Value::Object(existing)) = merged.get_mut(&key) {
                    existing.extend(members);
                }
            }
            value => {
                merged.insert(key, value);
            }
        }
    }
    serde_json::from_value(Value::Object(merged)).map_err(fail)
}

fn recase_members(parent: &str, value: Value) -> Value {
    let Value::Object(members) = value else {
        return value;
    };
    let members = members
        .into_iter()
        .map(|(member, value)| {
            let name = lookup_key(&format!("{parent}.{member}"))
                .and_then(|info| info.key.strip_prefix(parent))
                .and_then(|rest| rest.strip_prefix('.'))
                .map(str::to_string)
                .unwrap_or(member);
            (name, value)
        })
        .collect();
    Value::Object(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hive_domain::{Criteria, OrchestrationOverrides, ReasoningMode};
    use serde_json::json;

    #[test]
    fn test_top_level_keys_are_recased() {
        let patch = SettingsPatch::new()
            .with_extra("reasoningmode", json!("fast"))
            .with_extra("experimentalRouting", json!("v2"));
        let fixed = recase_patch(&patch).unwrap();
        assert_eq!(fixed.reasoning_mode, Some(ReasoningMode::Fast));
        assert_eq!(fixed.extra.get("experimentalRouting"), Some(&json!("v2")));
        assert_eq!(fixed.extra.len(), 1);
    }

    #[test]
    fn test_nested_members_are_recased() {
        let patch = SettingsPatch::new().with_extra(
            "orchestrationoverrides",
            json!({"maxiterations": 5, "enablerefinement": false}),
        );
        let fixed = recase_patch(&patch).unwrap();
        assert_eq!(
            fixed.orchestration_overrides,
            Some(OrchestrationOverrides::default().with_refinement(false).with_max_iterations(5))
        );
        assert!(fixed.extra.is_empty());
    }

    #[test]
    fn test_nested_members_merge_into_existing_record() {
        let patch = SettingsPatch {
            criteria: Some(Criteria::new(90, 40, 20)),
            ..Default::default()
        }
        .with_extra("CRITERIA", json!({"creativity": 65}));
        let fixed = recase_patch(&patch).unwrap();
        assert_eq!(fixed.criteria, Some(Criteria::new(90, 40, 65)));
    }

    #[test]
    fn test_undecodable_value_names_the_key() {
        let patch = SettingsPatch::new().with_extra("accuracylevel", json!("high"));
        let err = recase_patch(&patch).unwrap_err();
        assert_eq!(err.keys, "accuracyLevel");
    }
}
