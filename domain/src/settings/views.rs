//! Display projections of the settings aggregate.
//!
//! Pure read-only helpers used for badges and labels. None of them mutate
//! their input; out-of-range numbers are clamped rather than rejected.

use crate::settings::aggregate::{ACCURACY_LEVEL_MAX, ACCURACY_LEVEL_MIN, OrchestratorSettings};
use crate::settings::engines::Engine;
use crate::settings::options::EliteStrategy;
use crate::settings::selection::ModelSelection;

/// Boolean fields grouped under the "Advanced" badge
pub const ADVANCED_TOGGLE_KEYS: [&str; 7] = [
    "promptOptimization",
    "outputValidation",
    "answerStructure",
    "sharedMemory",
    "learnFromChat",
    "enableSpellCheck",
    "enableClarificationQuestions",
];

/// Labels for accuracy levels 1 through 5
pub const ACCURACY_LABELS: [&str; 5] = ["Fastest", "Fast", "Balanced", "Accurate", "Most Accurate"];

/// One row of the elite strategy table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Strategy picker rows, Automatic first
pub static STRATEGIES: [StrategyInfo; 7] = [
    StrategyInfo {
        key: "automatic",
        label: "Automatic",
        description: "Let the orchestrator pick a strategy per request",
    },
    StrategyInfo {
        key: "single_best",
        label: "Single Best",
        description: "Route to the single strongest model for the task",
    },
    StrategyInfo {
        key: "parallel_race",
        label: "Parallel Race",
        description: "Query several models at once and keep the first good answer",
    },
    StrategyInfo {
        key: "best_of_n",
        label: "Best of N",
        description: "Generate N candidates and select the highest scoring",
    },
    StrategyInfo {
        key: "quality_weighted_fusion",
        label: "Quality-Weighted Fusion",
        description: "Blend answers weighted by per-model quality scores",
    },
    StrategyInfo {
        key: "expert_panel",
        label: "Expert Panel",
        description: "Domain specialists answer and a moderator synthesizes",
    },
    StrategyInfo {
        key: "challenge_and_refine",
        label: "Challenge & Refine",
        description: "A critic challenges the draft until it holds up",
    },
];

/// Look up a strategy row; unrecognized keys get the Automatic row
pub fn strategy_info(strategy: &EliteStrategy) -> &'static StrategyInfo {
    STRATEGIES
        .iter()
        .find(|info| info.key == strategy.as_str())
        .unwrap_or(&STRATEGIES[0])
}

/// How many of the named boolean fields are on.
///
/// Names are wire names; anything that is not a boolean counts as off.
pub fn count_enabled_toggles<S: AsRef<str>>(settings: &OrchestratorSettings, keys: &[S]) -> usize {
    keys.iter()
        .filter(|key| settings.flag(key.as_ref()) == Some(true))
        .count()
}

/// Badge count for the "Advanced" section
pub fn advanced_toggle_count(settings: &OrchestratorSettings) -> usize {
    count_enabled_toggles(settings, &ADVANCED_TOGGLE_KEYS)
}

/// Number of manually enabled engines.
///
/// Automatic mode always reports zero, even if switches from an earlier
/// manual session are still stored.
pub fn active_engine_count(settings: &OrchestratorSettings) -> usize {
    if !settings.engines_mode.is_manual() {
        return 0;
    }
    Engine::ALL
        .iter()
        .filter(|engine| engine.is_enabled(settings))
        .count()
}

/// Label for an accuracy level; out-of-range levels are clamped first
pub fn accuracy_label(level: u8) -> &'static str {
    let level = level.clamp(ACCURACY_LEVEL_MIN, ACCURACY_LEVEL_MAX);
    ACCURACY_LABELS[usize::from(level - ACCURACY_LEVEL_MIN)]
}

/// Label of the selected elite strategy
pub fn current_strategy_label(settings: &OrchestratorSettings) -> &'static str {
    strategy_info(&settings.elite_strategy).label
}

/// Short description of the model picker state
pub fn model_summary(selection: &ModelSelection) -> String {
    match selection.picks() {
        [] => "Automatic".to_string(),
        [only] => only.to_string(),
        picks => format!("{} models", picks.len()),
    }
}

/// Short description of the reasoning-method picker state
pub fn reasoning_summary(settings: &OrchestratorSettings) -> String {
    let methods = &settings.advanced_reasoning_methods;
    if methods.is_empty() {
        "None".to_string()
    } else if methods.is_automatic() {
        "Automatic".to_string()
    } else {
        match methods.methods() {
            [only] => only.to_string(),
            many => format!("{} methods", many.len()),
        }
    }
}
