//! Settings session configuration.
//!
//! [`SessionConfig`] gathers what a [`SettingsSession`](crate::SettingsSession)
//! needs before it starts: the defaults a new chat begins with, the templates
//! it can apply, and which keys are mirrored locally.

use hive_domain::{
    OrchestratorSettings, SettingsPatch, TemplatePreset, apply_update, builtin_templates, lookup_key,
};

/// Keys mirrored to local storage when nothing else is configured
pub const DEFAULT_MIRROR_KEYS: [&str; 5] = [
    "selectedModels",
    "reasoningMode",
    "domainPack",
    "eliteStrategy",
    "accuracyLevel",
];

#[derive(Debug, Clone)]
pub struct SessionConfig {
    defaults: OrchestratorSettings,
    templates: Vec<TemplatePreset>,
    mirror_keys: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            defaults: OrchestratorSettings::default(),
            templates: builtin_templates(),
            mirror_keys: DEFAULT_MIRROR_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    /// Settings a new chat starts with.
    pub fn defaults(&self) -> &OrchestratorSettings {
        &self.defaults
    }

    /// Built-in templates followed by configured ones.
    pub fn templates(&self) -> &[TemplatePreset] {
        &self.templates
    }

    /// Wire names of keys written to the local mirror.
    pub fn mirror_keys(&self) -> &[String] {
        &self.mirror_keys
    }

    // ==================== Builder Methods ====================

    /// Layer a patch over the built-in defaults.
    pub fn with_defaults_patch(mut self, patch: &SettingsPatch) -> Self {
        self.defaults = apply_update(&self.defaults, patch);
        self
    }

    /// Add configured templates.
    ///
    /// Built-in templates are looked up first, so a configured template that
    /// reuses a built-in name is shadowed and dropped.
    pub fn with_templates(mut self, templates: impl IntoIterator<Item = TemplatePreset>) -> Self {
        for template in templates {
            let taken = self
                .templates
                .iter()
                .any(|t| t.name.eq_ignore_ascii_case(&template.name));
            if taken {
                tracing::warn!(
                    template = %template.name,
                    "Configured template shadowed by an existing template"
                );
                continue;
            }
            self.templates.push(template);
        }
        self
    }

    /// Keys to mirror, matched case-insensitively against the key registry.
    ///
    /// A nested member (`criteria.speed`) mirrors its whole record. Unknown
    /// keys are dropped with a warning.
    pub fn with_mirror_keys(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut mirror_keys: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            let Some(info) = lookup_key(&key) else {
                tracing::warn!(key = %key, "Unknown mirror key ignored");
                continue;
            };
            let top_level = info.key.split('.').next().unwrap_or(info.key);
            if !mirror_keys.iter().any(|k| k == top_level) {
                mirror_keys.push(top_level.to_string());
            }
        }
        self.mirror_keys = mirror_keys;
        self
    }

    /// Mirror nothing.
    pub fn without_mirror(self) -> Self {
        self.with_mirror_keys(Vec::<String>::new())
    }
}
