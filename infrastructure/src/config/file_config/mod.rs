//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod mirror;
mod output;
mod recase;
mod templates;

pub use logging::FileLoggingConfig;
pub use mirror::FileMirrorConfig;
pub use output::FileOutputConfig;
pub use templates::FileTemplateConfig;

use hive_application::SessionConfig;
use hive_domain::{ConfigIssue, SettingsPatch, apply_update, validate};
use recase::recase_patch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("[session] {key}: {reason}")]
    InvalidSessionValue { key: String, reason: String },

    #[error("[templates.{name}] settings: {reason}")]
    InvalidTemplate { name: String, reason: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Settings patch layered over the built-in defaults
    pub session: SettingsPatch,
    /// User template presets, keyed by name
    pub templates: BTreeMap<String, FileTemplateConfig>,
    /// Local settings mirror
    pub mirror: FileMirrorConfig,
    /// Structured change log
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// `[session]` with keys from case-folding sources restored.
    ///
    /// Environment variables reach us lowercased (`LLMHIVE_SESSION__REASONINGMODE`
    /// becomes `reasoningmode`) and would otherwise be kept as unknown keys.
    pub fn session_patch(&self) -> Result<SettingsPatch, ConfigValidationError> {
        recase_patch(&self.session).map_err(|e| ConfigValidationError::InvalidSessionValue {
            key: e.keys,
            reason: e.reason,
        })
    }

    /// Build the application's session configuration.
    pub fn to_session_config(&self) -> Result<SessionConfig, ConfigValidationError> {
        let templates = self
            .templates
            .iter()
            .map(|(name, template)| template.to_preset(name))
            .collect::<Result<Vec<_>, _>>()?;
        let mut config = SessionConfig::new()
            .with_defaults_patch(&self.session_patch()?)
            .with_templates(templates);

        if !self.mirror.enabled {
            config = config.without_mirror();
        } else if let Some(keys) = &self.mirror.keys {
            config = config.with_mirror_keys(keys.iter().cloned());
        }
        Ok(config)
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks the session defaults and every template as it would be
    /// applied over them.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let Ok(config) = self.to_session_config() else {
            return Vec::new();
        };
        let mut issues = validate(config.defaults());
        for (name, template) in &self.templates {
            if let Ok(preset) = template.to_preset(name) {
                issues.extend(validate(&apply_update(config.defaults(), &preset.settings)));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hive_domain::{AgentMode, DomainPack, ReasoningMode};
    use serde_json::json;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[session]
reasoningMode = "deep"
domainPack = "legal"
selectedModels = ["claude-opus", "gpt-5"]
accuracyLevel = 4

[session.criteria]
accuracy = 90
speed = 40
creativity = 20

[templates.team-review]
label = "Team Review"
description = "Two models argue it out"

[templates.team-review.settings]
agentMode = "team"
eliteStrategy = "expert_panel"

[mirror]
enabled = true
path = "/tmp/llmhive-settings.json"
keys = ["selectedModels"]

[logging]
change_log = "/tmp/llmhive-changes.jsonl"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.reasoning_mode, Some(ReasoningMode::Deep));
        assert_eq!(config.session.domain_pack, Some(DomainPack::Legal));
        assert_eq!(config.session.criteria.map(|c| c.accuracy), Some(90));
        assert_eq!(config.templates["team-review"].label.as_deref(), Some("Team Review"));
        assert_eq!(config.mirror.keys.as_deref(), Some(&["selectedModels".to_string()][..]));
        assert!(config.logging.change_log.is_some());
        assert!(!config.output.color);

        let session = config.to_session_config().unwrap();
        assert_eq!(session.defaults().accuracy_level, 4);
        assert_eq!(session.defaults().selected_models.ids(), vec!["claude-opus", "gpt-5"]);
        assert_eq!(session.mirror_keys(), &["selectedModels".to_string()]);
        let template = session
            .templates()
            .iter()
            .find(|t| t.name == "team-review")
            .unwrap();
        assert_eq!(template.settings.agent_mode, Some(AgentMode::Team));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[session]
preferCheaper = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.prefer_cheaper, Some(true));
        // Defaults should apply
        assert!(config.templates.is_empty());
        assert!(config.mirror.enabled);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.session.is_empty());
        assert!(config.mirror.enabled);
        assert!(config.mirror.keys.is_none());
        assert!(config.logging.change_log.is_none());
    }

    #[test]
    fn test_unknown_session_keys_are_kept() {
        let toml_str = r#"
[session]
experimentalRouting = "v2"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let session = config.to_session_config().unwrap();
        assert_eq!(session.defaults().extra.get("experimentalRouting"), Some(&json!("v2")));
    }

    #[test]
    fn test_lowercased_keys_are_recased() {
        let mut config = FileConfig::default();
        config.session = SettingsPatch::new()
            .with_extra("reasoningmode", json!("fast"))
            .with_extra("enablehrm", json!(true));

        let patch = config.session_patch().unwrap();
        assert_eq!(patch.reasoning_mode, Some(ReasoningMode::Fast));
        assert_eq!(patch.enable_hrm, Some(true));
        assert!(patch.extra.is_empty());
    }

    #[test]
    fn test_lowercased_nested_keys_are_recased() {
        let toml_str = r#"
[session.orchestrationOverrides]
enableRefinement = false
maxIterations = 2
"#;
        let mut config: FileConfig = toml::from_str(toml_str).unwrap();
        config.session = config
            .session
            .with_extra("orchestrationoverrides", json!({"maxiterations": 5}));

        let overrides = config.session_patch().unwrap().orchestration_overrides.unwrap();
        assert_eq!(overrides.max_iterations, 5);
        assert!(!overrides.enable_refinement);

        let session = config.to_session_config().unwrap();
        assert_eq!(session.defaults().orchestration_overrides.max_iterations, 5);
        assert!(session.defaults().extra.is_empty());
    }

    #[test]
    fn test_lowercased_mirror_keys_are_recased() {
        let toml_str = r#"
[mirror]
keys = ["selectedmodels", "criteria.speed", "nosuchkey"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.to_session_config().unwrap().mirror_keys(),
            &["selectedModels".to_string(), "criteria".to_string()]
        );
    }

    #[test]
    fn test_bad_recased_value_is_an_error() {
        let mut config = FileConfig::default();
        config.session = SettingsPatch::new().with_extra("reasoningmode", json!("ultra"));
        assert!(matches!(
            config.session_patch(),
            Err(ConfigValidationError::InvalidSessionValue { .. })
        ));
    }

    #[test]
    fn test_mirror_disabled() {
        let toml_str = r#"
[mirror]
enabled = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.to_session_config().unwrap().mirror_keys().is_empty());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_out_of_range_defaults() {
        let toml_str = r#"
[session]
accuracyLevel = 7
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate().len(), 1);
    }
}
