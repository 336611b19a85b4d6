//! Template presets from TOML (`[templates.<name>]` sections)

use super::ConfigValidationError;
use super::recase::recase_patch;
use hive_domain::{SettingsPatch, TemplatePreset};
use serde::{Deserialize, Serialize};

/// Raw template preset from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTemplateConfig {
    /// Display label (defaults to the table name)
    pub label: Option<String>,
    pub description: String,
    /// Keys applied over the session defaults
    pub settings: SettingsPatch,
}

impl FileTemplateConfig {
    /// Preset named `name`, with case-folded settings keys restored.
    pub fn to_preset(&self, name: &str) -> Result<TemplatePreset, ConfigValidationError> {
        let settings = recase_patch(&self.settings).map_err(|e| ConfigValidationError::InvalidTemplate {
            name: name.to_string(),
            reason: format!("{}: {}", e.keys, e.reason),
        })?;
        let label = self.label.clone().unwrap_or_else(|| name.to_string());
        Ok(TemplatePreset::new(name, label, settings).with_description(&self.description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hive_domain::ReasoningMode;
    use serde_json::json;

    #[test]
    fn test_label_defaults_to_name() {
        let toml_str = r#"
[templates.late-night]
[templates.late-night.settings]
reasoningMode = "fast"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let preset = config.templates["late-night"].to_preset("late-night").unwrap();
        assert_eq!(preset.label, "late-night");
        assert_eq!(preset.settings.reasoning_mode, Some(ReasoningMode::Fast));
    }

    #[test]
    fn test_lowercased_settings_are_recased() {
        let template = FileTemplateConfig {
            settings: SettingsPatch::new()
                .with_extra("reasoningmode", json!("deep"))
                .with_extra("orchestrationoverrides", json!({"maxiterations": 4})),
            ..Default::default()
        };
        let preset = template.to_preset("night-shift").unwrap();
        assert_eq!(preset.settings.reasoning_mode, Some(ReasoningMode::Deep));
        assert_eq!(
            preset.settings.orchestration_overrides.map(|o| o.max_iterations),
            Some(4)
        );
        assert!(preset.settings.extra.is_empty());
    }

    #[test]
    fn test_bad_settings_name_the_template() {
        let template = FileTemplateConfig {
            settings: SettingsPatch::new().with_extra("reasoningmode", json!("ultra")),
            ..Default::default()
        };
        assert!(matches!(
            template.to_preset("broken"),
            Err(ConfigValidationError::InvalidTemplate { name, .. }) if name == "broken"
        ));
    }
}
