//! Commands accepted by the settings store.

use hive_domain::{
    CriteriaPreset, Engine, EnginesMode, OrchestratorSettings, SettingsPatch, TemplatePreset,
    apply_criteria_preset, apply_update, select_automatic_engines, set_engines_mode,
    toggle_engine,
};

/// A requested change to the settings.
///
/// Toggle commands carry only the clicked item; the store resolves them
/// against its current settings at dispatch time, so two commands issued
/// back to back never act on a stale baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsCommand {
    /// Shallow-merge a partial update
    Update(SettingsPatch),
    ToggleModel(String),
    ToggleReasoningMethod(String),
    ToggleFeature(String),
    ToggleEngine { engine: Engine, enabled: bool },
    SelectAutomaticEngines,
    SetEnginesMode(EnginesMode),
    ApplyCriteriaPreset(CriteriaPreset),
    /// Start over from `defaults ⊕ template`
    ApplyTemplate(TemplatePreset),
    /// Start over from the defaults
    Reset,
}

impl SettingsCommand {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            SettingsCommand::Update(_) => "update",
            SettingsCommand::ToggleModel(_) => "toggle_model",
            SettingsCommand::ToggleReasoningMethod(_) => "toggle_reasoning_method",
            SettingsCommand::ToggleFeature(_) => "toggle_feature",
            SettingsCommand::ToggleEngine { .. } => "toggle_engine",
            SettingsCommand::SelectAutomaticEngines => "select_automatic_engines",
            SettingsCommand::SetEnginesMode(_) => "set_engines_mode",
            SettingsCommand::ApplyCriteriaPreset(_) => "apply_criteria_preset",
            SettingsCommand::ApplyTemplate(_) => "apply_template",
            SettingsCommand::Reset => "reset",
        }
    }

    /// The patch this command amounts to against `current`.
    ///
    /// `ApplyTemplate` and `Reset` replace the whole aggregate and have no
    /// patch form.
    pub fn resolve(&self, current: &OrchestratorSettings) -> Option<SettingsPatch> {
        let patch = match self {
            SettingsCommand::Update(patch) => patch.clone(),
            SettingsCommand::ToggleModel(id) => SettingsPatch {
                selected_models: Some(current.selected_models.toggle(id)),
                ..Default::default()
            },
            SettingsCommand::ToggleReasoningMethod(method) => SettingsPatch {
                advanced_reasoning_methods: Some(current.advanced_reasoning_methods.toggle(method)),
                ..Default::default()
            },
            SettingsCommand::ToggleFeature(feature) => SettingsPatch {
                advanced_features: Some(current.advanced_features.toggle(feature)),
                ..Default::default()
            },
            SettingsCommand::ToggleEngine { engine, enabled } => {
                toggle_engine(current, *engine, *enabled)
            }
            SettingsCommand::SelectAutomaticEngines => select_automatic_engines(),
            SettingsCommand::SetEnginesMode(mode) => set_engines_mode(current, *mode),
            SettingsCommand::ApplyCriteriaPreset(preset) => apply_criteria_preset(*preset),
            SettingsCommand::ApplyTemplate(_) | SettingsCommand::Reset => return None,
        };
        Some(patch)
    }

    /// Settings after this command is applied to `current`
    pub fn apply(
        &self,
        current: &OrchestratorSettings,
        defaults: &OrchestratorSettings,
    ) -> OrchestratorSettings {
        match self {
            SettingsCommand::ApplyTemplate(template) => template.instantiate(defaults),
            SettingsCommand::Reset => defaults.clone(),
            other => match other.resolve(current) {
                Some(patch) => apply_update(current, &patch),
                None => current.clone(),
            },
        }
    }
}
