//! Settings key registry for runtime access.
//!
//! Defines metadata for known settings keys: wire name, description, how the
//! key may be updated, and valid values. Used by `SettingsAccessorPort` and
//! the CLI `get` / `set` / `keys` commands.

use crate::core::error::DomainError;
use crate::settings::aggregate::{OrchestratorSettings, SettingsPatch};
use serde_json::Value;
use std::str::FromStr;

/// How a key may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    /// Scalar key: a shallow merge replaces it safely.
    Replace,
    /// One member of a nested record; resolved by read-modify-write of the
    /// parent record against the current settings.
    NestedField,
    /// Collection or whole nested record: only toggle commands or a complete
    /// next value may change it.
    Collection,
}

/// Metadata for a single settings key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    /// Wire name, dotted for nested members (e.g., `"criteria.speed"`).
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// How this key may be written.
    pub kind: UpdateKind,
    /// Valid string values (empty if freeform).
    pub valid_values: &'static [&'static str],
}

/// All known settings keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a settings key by its wire name (case-insensitive).
pub fn lookup_key(key: &str) -> Option<&'static ConfigKeyInfo> {
    let key = key.trim();
    KNOWN_KEYS.iter().find(|k| k.key.eq_ignore_ascii_case(key))
}

const BOOL_VALUES: &[&str] = &["true", "false"];

static KNOWN_KEYS: [ConfigKeyInfo; 31] = [
    // ==================== Single-select options ====================
    ConfigKeyInfo {
        key: "reasoningMode",
        description: "Reasoning depth",
        kind: UpdateKind::Replace,
        valid_values: &["fast", "standard", "deep"],
    },
    ConfigKeyInfo {
        key: "domainPack",
        description: "Domain prompt profile (unknown names are passed through)",
        kind: UpdateKind::Replace,
        valid_values: &[
            "default",
            "medical",
            "legal",
            "marketing",
            "coding",
            "research",
            "finance",
            "education",
            "real_estate",
        ],
    },
    ConfigKeyInfo {
        key: "agentMode",
        description: "Single agent or agent team",
        kind: UpdateKind::Replace,
        valid_values: &["single", "team"],
    },
    ConfigKeyInfo {
        key: "eliteStrategy",
        description: "Response-generation strategy",
        kind: UpdateKind::Replace,
        valid_values: &[
            "automatic",
            "single_best",
            "parallel_race",
            "best_of_n",
            "quality_weighted_fusion",
            "expert_panel",
            "challenge_and_refine",
        ],
    },
    ConfigKeyInfo {
        key: "answerFormat",
        description: "Shape of the final answer",
        kind: UpdateKind::Replace,
        valid_values: &[
            "automatic",
            "default",
            "structured",
            "bullet-points",
            "step-by-step",
            "academic",
            "concise",
        ],
    },
    ConfigKeyInfo {
        key: "enginesMode",
        description: "Whether the backend or the user picks engines",
        kind: UpdateKind::Replace,
        valid_values: &["automatic", "manual"],
    },
    // ==================== Numbers ====================
    ConfigKeyInfo {
        key: "accuracyLevel",
        description: "Accuracy/speed slider, 1 (fastest) to 5 (most accurate)",
        kind: UpdateKind::Replace,
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "maxCostUsd",
        description: "Routing cost ceiling in USD (0.01 to 5.00)",
        kind: UpdateKind::Replace,
        valid_values: &[],
    },
    // ==================== Toggles ====================
    ConfigKeyInfo {
        key: "promptOptimization",
        description: "Rewrite the prompt before routing",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "outputValidation",
        description: "Validate the answer before returning it",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "answerStructure",
        description: "Enforce a structured answer layout",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "sharedMemory",
        description: "Share memory across agents",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "learnFromChat",
        description: "Let the backend learn from this conversation",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "enableSpellCheck",
        description: "Spell-check the prompt",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "enableClarificationQuestions",
        description: "Ask clarifying questions before answering",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "enableHRM",
        description: "Hierarchical reasoning engine (implies manual engines)",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "enablePromptDiffusion",
        description: "Prompt diffusion engine (implies manual engines)",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "enableDeepConsensus",
        description: "Deep consensus engine (implies manual engines)",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "enableAdaptiveEnsemble",
        description: "Adaptive ensemble engine (implies manual engines)",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "preferCheaper",
        description: "Prefer cheaper models when quality is comparable",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "enableVerification",
        description: "Verify facts in the answer",
        kind: UpdateKind::Replace,
        valid_values: BOOL_VALUES,
    },
    // ==================== Nested members ====================
    ConfigKeyInfo {
        key: "criteria.accuracy",
        description: "Criteria equalizer: accuracy axis (0-100)",
        kind: UpdateKind::NestedField,
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "criteria.speed",
        description: "Criteria equalizer: speed axis (0-100)",
        kind: UpdateKind::NestedField,
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "criteria.creativity",
        description: "Criteria equalizer: creativity axis (0-100)",
        kind: UpdateKind::NestedField,
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "orchestrationOverrides.enableRefinement",
        description: "Run refinement passes",
        kind: UpdateKind::NestedField,
        valid_values: BOOL_VALUES,
    },
    ConfigKeyInfo {
        key: "orchestrationOverrides.maxIterations",
        description: "Maximum refinement iterations (1-5)",
        kind: UpdateKind::NestedField,
        valid_values: &[],
    },
    // ==================== Collections ====================
    ConfigKeyInfo {
        key: "selectedModels",
        description: "Selected models, or [\"automatic\"]",
        kind: UpdateKind::Collection,
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "advancedReasoningMethods",
        description: "Advanced reasoning methods, or [\"automatic\"]",
        kind: UpdateKind::Collection,
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "advancedFeatures",
        description: "Enabled advanced features",
        kind: UpdateKind::Collection,
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "criteria",
        description: "Criteria equalizer record",
        kind: UpdateKind::Collection,
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "orchestrationOverrides",
        description: "Orchestration override record",
        kind: UpdateKind::Collection,
        valid_values: &[],
    },
];

fn parse_bool(key: &str, raw: &str) -> Result<bool, DomainError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(DomainError::invalid(key, raw, "expected true or false")),
    }
}

fn parse_u8(key: &str, raw: &str) -> Result<u8, DomainError> {
    raw.trim()
        .parse::<u8>()
        .map_err(|_| DomainError::invalid(key, raw, "expected an integer from 0 to 255"))
}

fn parse_cost(key: &str, raw: &str) -> Result<f64, DomainError> {
    let value = raw
        .trim()
        .trim_start_matches('$')
        .parse::<f64>()
        .map_err(|_| DomainError::invalid(key, raw, "expected a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::invalid(key, raw, "expected a finite number"))
    }
}

fn parse_option<T>(key: &str, raw: &str) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| DomainError::invalid(key, raw, e.to_string()))
}

/// Parse a textual `key = value` assignment into a patch.
///
/// Nested members are resolved against `baseline` so the rest of the record
/// is preserved. Engine switches imply manual engines mode, matching
/// [`toggle_engine`](crate::settings::engines::toggle_engine).
pub fn parse_assignment(
    baseline: &OrchestratorSettings,
    key: &str,
    raw: &str,
) -> Result<SettingsPatch, DomainError> {
    let info = lookup_key(key).ok_or_else(|| DomainError::UnknownKey(key.to_string()))?;
    if info.kind == UpdateKind::Collection {
        return Err(DomainError::ReadModifyWrite(info.key.to_string()));
    }

    let key = info.key;
    let mut patch = SettingsPatch::new();
    match key {
        "reasoningMode" => patch.reasoning_mode = Some(parse_option(key, raw)?),
        "domainPack" => patch.domain_pack = Some(parse_option(key, raw)?),
        "agentMode" => patch.agent_mode = Some(parse_option(key, raw)?),
        "eliteStrategy" => patch.elite_strategy = Some(parse_option(key, raw)?),
        "answerFormat" => patch.answer_format = Some(parse_option(key, raw)?),
        "enginesMode" => {
            let mode = parse_option(key, raw)?;
            patch = crate::settings::engines::set_engines_mode(baseline, mode);
        }
        "accuracyLevel" => patch.accuracy_level = Some(parse_u8(key, raw)?),
        "maxCostUsd" => patch.max_cost_usd = Some(parse_cost(key, raw)?),
        "promptOptimization" => patch.prompt_optimization = Some(parse_bool(key, raw)?),
        "outputValidation" => patch.output_validation = Some(parse_bool(key, raw)?),
        "answerStructure" => patch.answer_structure = Some(parse_bool(key, raw)?),
        "sharedMemory" => patch.shared_memory = Some(parse_bool(key, raw)?),
        "learnFromChat" => patch.learn_from_chat = Some(parse_bool(key, raw)?),
        "enableSpellCheck" => patch.enable_spell_check = Some(parse_bool(key, raw)?),
        "enableClarificationQuestions" => {
            patch.enable_clarification_questions = Some(parse_bool(key, raw)?)
        }
        "enableHRM" | "enablePromptDiffusion" | "enableDeepConsensus" | "enableAdaptiveEnsemble" => {
            let engine: crate::settings::engines::Engine = key.parse()?;
            let enabled = parse_bool(key, raw)?;
            patch = crate::settings::engines::toggle_engine(baseline, engine, enabled);
        }
        "preferCheaper" => patch.prefer_cheaper = Some(parse_bool(key, raw)?),
        "enableVerification" => patch.enable_verification = Some(parse_bool(key, raw)?),
        "criteria.accuracy" => {
            patch.criteria = Some(baseline.criteria.with_accuracy(parse_u8(key, raw)?))
        }
        "criteria.speed" => patch.criteria = Some(baseline.criteria.with_speed(parse_u8(key, raw)?)),
        "criteria.creativity" => {
            patch.criteria = Some(baseline.criteria.with_creativity(parse_u8(key, raw)?))
        }
        "orchestrationOverrides.enableRefinement" => {
            patch.orchestration_overrides = Some(
                baseline
                    .orchestration_overrides
                    .with_refinement(parse_bool(key, raw)?),
            )
        }
        "orchestrationOverrides.maxIterations" => {
            patch.orchestration_overrides = Some(
                baseline
                    .orchestration_overrides
                    .with_max_iterations(parse_u8(key, raw)?),
            )
        }
        _ => return Err(DomainError::UnknownKey(key.to_string())),
    }
    Ok(patch)
}

/// Read a key's current value as JSON.
///
/// Dotted keys descend into nested records. Keys outside the registry are
/// looked up among the unknown keys the settings carry.
pub fn read_key(settings: &OrchestratorSettings, key: &str) -> Option<Value> {
    let key = lookup_key(key).map(|info| info.key).unwrap_or(key.trim());
    let root = serde_json::to_value(settings).ok()?;
    key.split('.')
        .try_fold(&root, |value, segment| value.get(segment))
        .cloned()
}
