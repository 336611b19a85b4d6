//! The orchestrator settings aggregate and its merge rule.
//!
//! [`OrchestratorSettings`] is the one configuration object every picker,
//! toggle and preset reads and writes. All writes go through
//! [`apply_update`] with a [`SettingsPatch`]: each field present in the
//! patch replaces the current value, every other field is kept.
//!
//! Collection and nested fields (`selectedModels`, `advancedReasoningMethods`,
//! `advancedFeatures`, `criteria`, `orchestrationOverrides`) are replaced as a
//! whole. The caller computes the next value from the current one (see
//! [`crate::settings::selection`] and the `with_*` builders below); a patch
//! cannot carry half of a nested record.

use crate::settings::options::{
    AgentMode, AnswerFormat, DomainPack, EliteStrategy, EnginesMode, ReasoningMode,
};
use crate::settings::selection::{FeatureSet, ModelSelection, ReasoningSelection};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const ACCURACY_LEVEL_MIN: u8 = 1;
pub const ACCURACY_LEVEL_MAX: u8 = 5;
pub const DEFAULT_ACCURACY_LEVEL: u8 = 3;
pub const MAX_COST_USD_MIN: f64 = 0.01;
pub const MAX_COST_USD_MAX: f64 = 5.0;
pub const DEFAULT_MAX_COST_USD: f64 = 1.0;
pub const CRITERIA_AXIS_MAX: u8 = 100;
pub const MAX_ITERATIONS_MIN: u8 = 1;
pub const MAX_ITERATIONS_MAX: u8 = 5;

// ==================== Nested records ====================

/// Criteria equalizer: three independent 0–100 axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub accuracy: u8,
    pub speed: u8,
    pub creativity: u8,
}

impl Default for Criteria {
    /// The Balanced preset
    fn default() -> Self {
        Self::new(70, 60, 50)
    }
}

impl Criteria {
    pub const fn new(accuracy: u8, speed: u8, creativity: u8) -> Self {
        Self {
            accuracy,
            speed,
            creativity,
        }
    }

    pub fn with_accuracy(mut self, value: u8) -> Self {
        self.accuracy = value;
        self
    }

    pub fn with_speed(mut self, value: u8) -> Self {
        self.speed = value;
        self
    }

    pub fn with_creativity(mut self, value: u8) -> Self {
        self.creativity = value;
        self
    }

    pub fn clamped(self) -> Self {
        Self {
            accuracy: self.accuracy.min(CRITERIA_AXIS_MAX),
            speed: self.speed.min(CRITERIA_AXIS_MAX),
            creativity: self.creativity.min(CRITERIA_AXIS_MAX),
        }
    }
}

/// Per-request orchestration overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrchestrationOverrides {
    pub enable_refinement: bool,
    pub max_iterations: u8,
}

impl Default for OrchestrationOverrides {
    fn default() -> Self {
        Self {
            enable_refinement: true,
            max_iterations: 3,
        }
    }
}

impl OrchestrationOverrides {
    pub fn with_refinement(mut self, enabled: bool) -> Self {
        self.enable_refinement = enabled;
        self
    }

    pub fn with_max_iterations(mut self, max: u8) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn clamped(self) -> Self {
        Self {
            max_iterations: self
                .max_iterations
                .clamp(MAX_ITERATIONS_MIN, MAX_ITERATIONS_MAX),
            ..self
        }
    }
}

// ==================== OrchestratorSettings ====================

/// Client-side configuration of how a chat request is orchestrated.
///
/// Serializes with the camelCase field names the chat backend reads. Keys
/// this version does not know are kept in [`extra`](Self::extra) and written
/// back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrchestratorSettings {
    pub reasoning_mode: ReasoningMode,
    pub domain_pack: DomainPack,
    pub agent_mode: AgentMode,
    pub selected_models: ModelSelection,
    pub advanced_reasoning_methods: ReasoningSelection,
    pub advanced_features: FeatureSet,

    pub prompt_optimization: bool,
    pub output_validation: bool,
    pub answer_structure: bool,
    pub shared_memory: bool,
    pub learn_from_chat: bool,
    pub enable_spell_check: bool,
    pub enable_clarification_questions: bool,

    pub engines_mode: EnginesMode,
    #[serde(rename = "enableHRM")]
    pub enable_hrm: bool,
    pub enable_prompt_diffusion: bool,
    pub enable_deep_consensus: bool,
    pub enable_adaptive_ensemble: bool,

    pub elite_strategy: EliteStrategy,
    pub accuracy_level: u8,
    pub criteria: Criteria,
    pub max_cost_usd: f64,
    pub prefer_cheaper: bool,
    pub answer_format: AnswerFormat,
    pub orchestration_overrides: OrchestrationOverrides,
    pub enable_verification: bool,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            reasoning_mode: ReasoningMode::Standard,
            domain_pack: DomainPack::Default,
            agent_mode: AgentMode::Single,
            selected_models: ModelSelection::Automatic,
            advanced_reasoning_methods: ReasoningSelection::empty(),
            advanced_features: FeatureSet::default(),
            prompt_optimization: false,
            output_validation: false,
            answer_structure: false,
            shared_memory: false,
            learn_from_chat: false,
            enable_spell_check: false,
            enable_clarification_questions: false,
            engines_mode: EnginesMode::Automatic,
            enable_hrm: false,
            enable_prompt_diffusion: false,
            enable_deep_consensus: false,
            enable_adaptive_ensemble: false,
            elite_strategy: EliteStrategy::Automatic,
            accuracy_level: DEFAULT_ACCURACY_LEVEL,
            criteria: Criteria::default(),
            max_cost_usd: DEFAULT_MAX_COST_USD,
            prefer_cheaper: false,
            answer_format: AnswerFormat::Automatic,
            orchestration_overrides: OrchestrationOverrides::default(),
            enable_verification: true,
            extra: BTreeMap::new(),
        }
    }
}

impl OrchestratorSettings {
    /// Apply a patch, returning the next settings. See [`apply_update`].
    pub fn apply(&self, patch: &SettingsPatch) -> Self {
        apply_update(self, patch)
    }

    /// Value of a boolean field by its wire name.
    ///
    /// Falls back to boolean values stored under unknown keys; returns
    /// `None` for anything that is not a boolean.
    pub fn flag(&self, key: &str) -> Option<bool> {
        let value = match key {
            "promptOptimization" => self.prompt_optimization,
            "outputValidation" => self.output_validation,
            "answerStructure" => self.answer_structure,
            "sharedMemory" => self.shared_memory,
            "learnFromChat" => self.learn_from_chat,
            "enableSpellCheck" => self.enable_spell_check,
            "enableClarificationQuestions" => self.enable_clarification_questions,
            "enableHRM" => self.enable_hrm,
            "enablePromptDiffusion" => self.enable_prompt_diffusion,
            "enableDeepConsensus" => self.enable_deep_consensus,
            "enableAdaptiveEnsemble" => self.enable_adaptive_ensemble,
            "preferCheaper" => self.prefer_cheaper,
            "enableVerification" => self.enable_verification,
            other => return self.extra.get(other).and_then(Value::as_bool),
        };
        Some(value)
    }

    /// Copy with every numeric field forced into its documented range.
    ///
    /// A non-finite cost ceiling falls back to the default. In automatic
    /// engines mode the four engine switches are forced off, whichever path
    /// set them.
    pub fn clamped(&self) -> Self {
        let max_cost_usd = if self.max_cost_usd.is_finite() {
            self.max_cost_usd.clamp(MAX_COST_USD_MIN, MAX_COST_USD_MAX)
        } else {
            DEFAULT_MAX_COST_USD
        };
        let manual = self.engines_mode.is_manual();
        Self {
            enable_hrm: manual && self.enable_hrm,
            enable_prompt_diffusion: manual && self.enable_prompt_diffusion,
            enable_deep_consensus: manual && self.enable_deep_consensus,
            enable_adaptive_ensemble: manual && self.enable_adaptive_ensemble,
            accuracy_level: self
                .accuracy_level
                .clamp(ACCURACY_LEVEL_MIN, ACCURACY_LEVEL_MAX),
            criteria: self.criteria.clamped(),
            max_cost_usd,
            orchestration_overrides: self.orchestration_overrides.clamped(),
            ..self.clone()
        }
    }

    /// Wire names of top-level keys whose values differ between two settings
    pub fn changed_keys(&self, other: &OrchestratorSettings) -> Vec<String> {
        let (Ok(Value::Object(before)), Ok(Value::Object(after))) =
            (serde_json::to_value(self), serde_json::to_value(other))
        else {
            return Vec::new();
        };

        let mut keys: Vec<String> = after
            .iter()
            .filter(|(key, value)| before.get(key.as_str()) != Some(*value))
            .map(|(key, _)| key.clone())
            .collect();
        keys.extend(
            before
                .keys()
                .filter(|key| !after.contains_key(key.as_str()))
                .cloned(),
        );
        keys
    }
}

// ==================== SettingsPatch ====================

macro_rules! merge_fields {
    ($target:ident, $source:ident; $($field:ident),+ $(,)?) => {
        $(
            if $source.$field.is_some() {
                $target.$field = $source.$field;
            }
        )+
    };
}

/// A partial update: any subset of the top-level settings keys.
///
/// Deserializes from the same camelCase keys as [`OrchestratorSettings`];
/// keys it does not recognize land in [`extra`](Self::extra) and are stored
/// as-is when applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_mode: Option<ReasoningMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_pack: Option<DomainPack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_mode: Option<AgentMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_models: Option<ModelSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_reasoning_methods: Option<ReasoningSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_features: Option<FeatureSet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_optimization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_validation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_structure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_memory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learn_from_chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_spell_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_clarification_questions: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub engines_mode: Option<EnginesMode>,
    #[serde(rename = "enableHRM", skip_serializing_if = "Option::is_none")]
    pub enable_hrm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_prompt_diffusion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_deep_consensus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_adaptive_ensemble: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub elite_strategy: Option<EliteStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Criteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cost_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_cheaper: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_format: Option<AnswerFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orchestration_overrides: Option<OrchestrationOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_verification: Option<bool>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire names of the keys this patch sets
    pub fn keys(&self) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Combine two patches; keys set in `later` win
    pub fn merge(self, later: SettingsPatch) -> Self {
        let mut merged = self;
        merge_fields!(merged, later;
            reasoning_mode, domain_pack, agent_mode, selected_models,
            advanced_reasoning_methods, advanced_features, prompt_optimization,
            output_validation, answer_structure, shared_memory, learn_from_chat,
            enable_spell_check, enable_clarification_questions, engines_mode,
            enable_hrm, enable_prompt_diffusion, enable_deep_consensus,
            enable_adaptive_ensemble, elite_strategy, accuracy_level, criteria,
            max_cost_usd, prefer_cheaper, answer_format, orchestration_overrides,
            enable_verification,
        );
        merged.extra.extend(later.extra);
        merged
    }

    /// Patch carrying one unknown key
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Shallow merge: every key present in `patch` replaces the same key in
/// `current`; untouched keys are carried over.
///
/// Total and side-effect free. The result owns all of its data, so mutating
/// it never reaches back into `current`.
pub fn apply_update(current: &OrchestratorSettings, patch: &SettingsPatch) -> OrchestratorSettings {
    let mut next = current.clone();
    apply_fields(&mut next, patch.clone());
    next
}

fn apply_fields(next: &mut OrchestratorSettings, patch: SettingsPatch) {
    macro_rules! replace {
        ($($field:ident),+ $(,)?) => {
            $(
                if let Some(value) = patch.$field {
                    next.$field = value;
                }
            )+
        };
    }
    replace!(
        reasoning_mode, domain_pack, agent_mode, selected_models,
        advanced_reasoning_methods, advanced_features, prompt_optimization,
        output_validation, answer_structure, shared_memory, learn_from_chat,
        enable_spell_check, enable_clarification_questions, engines_mode,
        enable_hrm, enable_prompt_diffusion, enable_deep_consensus,
        enable_adaptive_ensemble, elite_strategy, accuracy_level, criteria,
        max_cost_usd, prefer_cheaper, answer_format, orchestration_overrides,
        enable_verification,
    );
    // a known key smuggled in as "extra" would serialize twice
    next.extra.extend(
        patch
            .extra
            .into_iter()
            .filter(|(key, _)| !FIELD_NAMES.contains(&key.as_str())),
    );
}

/// Wire names of every typed top-level field
pub const FIELD_NAMES: [&str; 26] = [
    "reasoningMode",
    "domainPack",
    "agentMode",
    "selectedModels",
    "advancedReasoningMethods",
    "advancedFeatures",
    "promptOptimization",
    "outputValidation",
    "answerStructure",
    "sharedMemory",
    "learnFromChat",
    "enableSpellCheck",
    "enableClarificationQuestions",
    "enginesMode",
    "enableHRM",
    "enablePromptDiffusion",
    "enableDeepConsensus",
    "enableAdaptiveEnsemble",
    "eliteStrategy",
    "accuracyLevel",
    "criteria",
    "maxCostUsd",
    "preferCheaper",
    "answerFormat",
    "orchestrationOverrides",
    "enableVerification",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::selection::toggle_model;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let settings = OrchestratorSettings::default();
        assert_eq!(settings.reasoning_mode, ReasoningMode::Standard);
        assert_eq!(settings.domain_pack, DomainPack::Default);
        assert_eq!(settings.agent_mode, AgentMode::Single);
        assert!(settings.selected_models.is_automatic());
        assert!(settings.advanced_reasoning_methods.is_empty());
        assert_eq!(settings.engines_mode, EnginesMode::Automatic);
        assert_eq!(settings.accuracy_level, 3);
        assert_eq!(settings.max_cost_usd, 1.0);
        assert!(settings.orchestration_overrides.enable_refinement);
        assert_eq!(settings.orchestration_overrides.max_iterations, 3);
        assert!(settings.enable_verification);
        assert!(!settings.prefer_cheaper);
    }

    #[test]
    fn test_untouched_keys_survive_merge() {
        let current = OrchestratorSettings {
            accuracy_level: 1,
            reasoning_mode: ReasoningMode::Fast,
            ..Default::default()
        };
        let patch = SettingsPatch {
            reasoning_mode: Some(ReasoningMode::Deep),
            ..Default::default()
        };

        let next = apply_update(&current, &patch);
        assert_eq!(next.reasoning_mode, ReasoningMode::Deep);
        assert_eq!(next.accuracy_level, 1);
        assert_eq!(current.reasoning_mode, ReasoningMode::Fast);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let current = OrchestratorSettings::default();
        assert_eq!(apply_update(&current, &SettingsPatch::new()), current);
        assert!(SettingsPatch::new().is_empty());
    }

    #[test]
    fn test_merge_result_does_not_alias_current() {
        let current = OrchestratorSettings {
            selected_models: ModelSelection::from_ids(["gpt-5"]),
            ..Default::default()
        };
        let patch = SettingsPatch {
            criteria: Some(Criteria::new(10, 20, 30)),
            ..Default::default()
        };

        let mut next = apply_update(&current, &patch);
        next.selected_models = toggle_model(&next.selected_models, "claude-opus");
        next.advanced_features = next.advanced_features.toggle("web-search");
        next.criteria.speed = 99;
        next.orchestration_overrides.max_iterations = 5;

        assert_eq!(current.selected_models.ids(), vec!["gpt-5"]);
        assert!(current.advanced_features.is_empty());
        assert_eq!(current.criteria, Criteria::default());
        assert_eq!(current.orchestration_overrides.max_iterations, 3);
        assert_eq!(patch.criteria, Some(Criteria::new(10, 20, 30)));
    }

    #[test]
    fn test_nested_record_is_replaced_whole() {
        let current = OrchestratorSettings::default();
        let overrides = current.orchestration_overrides.with_max_iterations(5);
        let patch = SettingsPatch {
            orchestration_overrides: Some(overrides),
            ..Default::default()
        };

        let next = apply_update(&current, &patch);
        assert!(next.orchestration_overrides.enable_refinement);
        assert_eq!(next.orchestration_overrides.max_iterations, 5);
    }

    #[test]
    fn test_unknown_keys_are_stored() {
        let patch: SettingsPatch = serde_json::from_value(json!({
            "reasoningMode": "deep",
            "experimentalRouter": {"tier": 2}
        }))
        .unwrap();

        let next = apply_update(&OrchestratorSettings::default(), &patch);
        assert_eq!(next.reasoning_mode, ReasoningMode::Deep);
        assert_eq!(next.extra.get("experimentalRouter"), Some(&json!({"tier": 2})));

        let out = serde_json::to_value(&next).unwrap();
        assert_eq!(out["experimentalRouter"], json!({"tier": 2}));
    }

    #[test]
    fn test_known_key_in_extra_is_ignored() {
        let patch = SettingsPatch::new().with_extra("accuracyLevel", json!(5));
        let next = apply_update(&OrchestratorSettings::default(), &patch);
        assert_eq!(next.accuracy_level, 3);
        assert!(next.extra.is_empty());
    }

    #[test]
    fn test_wire_names() {
        let value = serde_json::to_value(OrchestratorSettings::default()).unwrap();
        let object = value.as_object().unwrap();
        for name in FIELD_NAMES {
            assert!(object.contains_key(name), "missing {name}");
        }
        assert_eq!(object.len(), FIELD_NAMES.len());
        assert_eq!(value["selectedModels"], json!(["automatic"]));
        assert_eq!(
            value["orchestrationOverrides"],
            json!({"enableRefinement": true, "maxIterations": 3})
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: OrchestratorSettings =
            serde_json::from_value(json!({"enableHRM": true, "domainPack": "legal"})).unwrap();
        assert!(settings.enable_hrm);
        assert_eq!(settings.domain_pack, DomainPack::Legal);
        assert_eq!(settings.accuracy_level, DEFAULT_ACCURACY_LEVEL);
        assert!(settings.extra.is_empty());
    }

    #[test]
    fn test_patch_keys() {
        let patch = SettingsPatch {
            enable_hrm: Some(true),
            engines_mode: Some(EnginesMode::Manual),
            ..Default::default()
        };
        let mut keys = patch.keys();
        keys.sort();
        assert_eq!(keys, vec!["enableHRM", "enginesMode"]);
    }

    #[test]
    fn test_patch_merge_later_wins() {
        let base = SettingsPatch {
            accuracy_level: Some(2),
            prefer_cheaper: Some(true),
            ..Default::default()
        };
        let later = SettingsPatch {
            accuracy_level: Some(5),
            ..Default::default()
        };
        let merged = base.merge(later);
        assert_eq!(merged.accuracy_level, Some(5));
        assert_eq!(merged.prefer_cheaper, Some(true));
    }

    #[test]
    fn test_flag_lookup() {
        let mut settings = OrchestratorSettings {
            shared_memory: true,
            ..Default::default()
        };
        settings.extra.insert("betaVoice".to_string(), json!(true));
        settings.extra.insert("betaLabel".to_string(), json!("x"));

        assert_eq!(settings.flag("sharedMemory"), Some(true));
        assert_eq!(settings.flag("enableVerification"), Some(true));
        assert_eq!(settings.flag("betaVoice"), Some(true));
        assert_eq!(settings.flag("betaLabel"), None);
        assert_eq!(settings.flag("missing"), None);
    }

    #[test]
    fn test_clamped() {
        let settings = OrchestratorSettings {
            accuracy_level: 7,
            max_cost_usd: 12.0,
            criteria: Criteria::new(150, 20, 255),
            orchestration_overrides: OrchestrationOverrides::default().with_max_iterations(0),
            ..Default::default()
        };
        let clamped = settings.clamped();
        assert_eq!(clamped.accuracy_level, 5);
        assert_eq!(clamped.max_cost_usd, 5.0);
        assert_eq!(clamped.criteria, Criteria::new(100, 20, 100));
        assert_eq!(clamped.orchestration_overrides.max_iterations, 1);

        let nan = OrchestratorSettings {
            max_cost_usd: f64::NAN,
            ..Default::default()
        };
        assert_eq!(nan.clamped().max_cost_usd, DEFAULT_MAX_COST_USD);
    }

    #[test]
    fn test_clamped_drops_engine_switches_in_automatic_mode() {
        let patched = apply_update(
            &OrchestratorSettings::default(),
            &serde_json::from_value(json!({"enableHRM": true, "enableDeepConsensus": true})).unwrap(),
        );
        assert_eq!(patched.engines_mode, EnginesMode::Automatic);
        assert!(patched.enable_hrm);

        let clamped = patched.clamped();
        assert!(!clamped.enable_hrm);
        assert!(!clamped.enable_deep_consensus);

        let manual = OrchestratorSettings {
            engines_mode: EnginesMode::Manual,
            ..patched
        };
        assert!(manual.clamped().enable_hrm);
        assert!(manual.clamped().enable_deep_consensus);
    }

    #[test]
    fn test_changed_keys() {
        let before = OrchestratorSettings::default();
        let after = OrchestratorSettings {
            agent_mode: AgentMode::Team,
            selected_models: ModelSelection::from_ids(["gpt-5"]),
            ..Default::default()
        };
        let mut keys = before.changed_keys(&after);
        keys.sort();
        assert_eq!(keys, vec!["agentMode", "selectedModels"]);
        assert!(before.changed_keys(&before).is_empty());
    }
}
