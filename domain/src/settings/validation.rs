//! Range and combination checks for [`OrchestratorSettings`].
//!
//! The store never rejects a value. These checks report what the backend
//! would clamp or misread so callers can warn about it.
//!
//! # Examples
//!
//! ```
//! use hive_domain::OrchestratorSettings;
//! use hive_domain::settings::validation::validate;
//!
//! let issues = validate(&OrchestratorSettings::default());
//! assert!(issues.is_empty());
//! ```

use crate::settings::aggregate::{
    ACCURACY_LEVEL_MAX, ACCURACY_LEVEL_MIN, CRITERIA_AXIS_MAX, MAX_COST_USD_MAX, MAX_COST_USD_MIN,
    MAX_ITERATIONS_MAX, MAX_ITERATIONS_MIN, OrchestratorSettings,
};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The value cannot be sent as-is.
    Error,
    /// The value will be clamped or may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    AccuracyLevelOutOfRange,
    MaxCostOutOfRange,
    MaxCostNotFinite,
    CriteriaOutOfRange { axis: &'static str },
    MaxIterationsOutOfRange,
    /// Team mode with a single explicit model.
    TeamOfOne,
}

/// A detected issue in the settings.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    fn warning(code: ConfigIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }
}

/// Check every numeric range and the agent/model combination.
pub fn validate(settings: &OrchestratorSettings) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if !(ACCURACY_LEVEL_MIN..=ACCURACY_LEVEL_MAX).contains(&settings.accuracy_level) {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::AccuracyLevelOutOfRange,
            format!(
                "accuracyLevel {} is outside {}..={} and will be clamped",
                settings.accuracy_level, ACCURACY_LEVEL_MIN, ACCURACY_LEVEL_MAX
            ),
        ));
    }

    if !settings.max_cost_usd.is_finite() {
        issues.push(ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::MaxCostNotFinite,
            message: "maxCostUsd is not a finite number".to_string(),
        });
    } else if !(MAX_COST_USD_MIN..=MAX_COST_USD_MAX).contains(&settings.max_cost_usd) {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::MaxCostOutOfRange,
            format!(
                "maxCostUsd {:.2} is outside {:.2}..={:.2} and will be clamped",
                settings.max_cost_usd, MAX_COST_USD_MIN, MAX_COST_USD_MAX
            ),
        ));
    }

    let criteria = &settings.criteria;
    for (axis, value) in [
        ("accuracy", criteria.accuracy),
        ("speed", criteria.speed),
        ("creativity", criteria.creativity),
    ] {
        if value > CRITERIA_AXIS_MAX {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::CriteriaOutOfRange { axis },
                format!("criteria.{} {} exceeds {}", axis, value, CRITERIA_AXIS_MAX),
            ));
        }
    }

    let max_iterations = settings.orchestration_overrides.max_iterations;
    if !(MAX_ITERATIONS_MIN..=MAX_ITERATIONS_MAX).contains(&max_iterations) {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::MaxIterationsOutOfRange,
            format!(
                "orchestrationOverrides.maxIterations {} is outside {}..={}",
                max_iterations, MAX_ITERATIONS_MIN, MAX_ITERATIONS_MAX
            ),
        ));
    }

    if settings.agent_mode.is_team() && settings.selected_models.picks().len() == 1 {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::TeamOfOne,
            "Team mode with a single selected model behaves like single-agent mode".to_string(),
        ));
    }

    issues
}

/// Check whether any issues are errors (i.e. fatal).
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
