//! Settings session controller.
//!
//! [`SettingsSession`] owns the [`SettingsStore`] for one chat surface and
//! wires it to the outside: it restores mirrored keys on start, logs every
//! change through the change-logger port and keeps the local mirror current.
//! Mirror and logger failures never reach the caller.

use crate::config::SessionConfig;
use crate::ports::change_logger::{NoChangeLogger, SettingsChangeEvent, SettingsChangeLogger};
use crate::ports::settings_accessor::{SettingsAccessError, SettingsAccessorPort, SettingsValue};
use crate::ports::settings_mirror::{NoMirror, SettingsMirrorPort};
use crate::store::{DispatchOutcome, SettingsCommand, SettingsStore};
use hive_domain::{
    ConfigIssue, DomainError, OrchestratorSettings, SettingsPatch, Severity, TemplatePreset,
    UpdateKind, find_template, known_keys, lookup_key, parse_assignment, read_key, validate,
};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Errors surfaced by session operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct SettingsSession {
    store: SettingsStore,
    templates: Vec<TemplatePreset>,
    mirror_keys: Vec<String>,
    mirror: Arc<dyn SettingsMirrorPort>,
    change_logger: Arc<dyn SettingsChangeLogger>,
}

impl SettingsSession {
    /// Session at the configured defaults, with no mirror and no change log.
    ///
    /// Call [`start`](Self::start) once the adapters are attached.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            store: SettingsStore::new(config.defaults().clone()),
            templates: config.templates().to_vec(),
            mirror_keys: config.mirror_keys().to_vec(),
            mirror: Arc::new(NoMirror),
            change_logger: Arc::new(NoChangeLogger),
        }
    }

    pub fn with_mirror(mut self, mirror: Arc<dyn SettingsMirrorPort>) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_change_logger(mut self, logger: Arc<dyn SettingsChangeLogger>) -> Self {
        self.change_logger = logger;
        self
    }

    /// Restore mirrored keys over the defaults.
    ///
    /// Each key is read and decoded on its own; a missing or unreadable
    /// value leaves that key at its default.
    pub fn start(mut self) -> Self {
        let mut patch = SettingsPatch::new();
        let mut restored = Vec::new();

        for key in &self.mirror_keys {
            let raw = match self.mirror.load(key) {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(e) => {
                    debug!(key = %key, error = %e, "Mirror read failed, keeping default");
                    continue;
                }
            };
            match decode_mirrored(key, &raw) {
                Some(value) => {
                    patch = patch.merge(value);
                    restored.push(key.clone());
                }
                None => debug!(key = %key, "Discarding unreadable mirrored value"),
            }
        }

        if !patch.is_empty() {
            self.store.dispatch(SettingsCommand::Update(patch));
        }

        info!(restored = ?restored, "Settings session started");
        self.change_logger.log(SettingsChangeEvent::new(
            "session_started",
            json!({ "restoredKeys": restored }),
        ));
        self
    }

    // ==================== Accessors ====================

    /// Current settings
    pub fn settings(&self) -> Arc<OrchestratorSettings> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<OrchestratorSettings>> {
        self.store.subscribe()
    }

    /// Settings a new chat starts with
    pub fn defaults(&self) -> &OrchestratorSettings {
        self.store.defaults()
    }

    /// Built-in templates followed by configured ones
    pub fn templates(&self) -> &[TemplatePreset] {
        &self.templates
    }

    /// Validation issues for the current settings
    pub fn validate(&self) -> Vec<ConfigIssue> {
        validate(&self.settings())
    }

    // ==================== Commands ====================

    /// Apply a command, log it and mirror the keys it changed.
    pub fn dispatch(&mut self, command: SettingsCommand) -> DispatchOutcome {
        let name = command.name();
        let outcome = self.store.dispatch(command);
        if outcome.changed() {
            self.change_logger.log(SettingsChangeEvent::new(
                "settings_changed",
                json!({
                    "command": name,
                    "changedKeys": outcome.changed_keys,
                }),
            ));
            self.mirror_changes(&outcome.settings, &outcome.changed_keys);
        }
        outcome
    }

    /// Apply commands strictly in order
    pub fn dispatch_all(
        &mut self,
        commands: impl IntoIterator<Item = SettingsCommand>,
    ) -> Vec<DispatchOutcome> {
        commands
            .into_iter()
            .map(|command| self.dispatch(command))
            .collect()
    }

    /// Start a new chat from the defaults.
    pub fn new_chat(&mut self) -> DispatchOutcome {
        info!("Starting new chat with default settings");
        self.dispatch(SettingsCommand::Reset)
    }

    /// Replace the settings with `defaults ⊕ template`.
    pub fn apply_template(&mut self, name: &str) -> Result<DispatchOutcome, SessionError> {
        let template = find_template(&self.templates, name)?.clone();
        info!(template = %template.name, "Applying template");
        Ok(self.dispatch(SettingsCommand::ApplyTemplate(template)))
    }

    fn mirror_changes(&self, settings: &OrchestratorSettings, changed_keys: &[String]) {
        for key in self.mirror_keys.iter().filter(|k| changed_keys.contains(k)) {
            let result = match read_key(settings, key) {
                Some(value) => self.mirror.save(key, &value.to_string()),
                None => self.mirror.remove(key),
            };
            if let Err(e) = result {
                warn!(key = %key, error = %e, "Failed to mirror settings key");
            }
        }
    }
}

/// Decode one mirrored value into a single-key patch
fn decode_mirrored(key: &str, raw: &str) -> Option<SettingsPatch> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let mut object = Map::new();
    object.insert(key.to_string(), value);
    serde_json::from_value(Value::Object(object)).ok()
}

fn access_error(key: &str, error: DomainError) -> SettingsAccessError {
    match error {
        DomainError::UnknownKey(key) => SettingsAccessError::UnknownKey { key },
        DomainError::ReadModifyWrite(key) => SettingsAccessError::RequiresToggle { key },
        DomainError::InvalidValue { key, reason, .. } => SettingsAccessError::InvalidValue {
            key,
            message: reason,
        },
        other => SettingsAccessError::InvalidValue {
            key: key.to_string(),
            message: other.to_string(),
        },
    }
}

impl SettingsAccessorPort for SettingsSession {
    fn settings_get(&self, key: &str) -> Result<SettingsValue, SettingsAccessError> {
        read_key(&self.settings(), key)
            .map(SettingsValue::from)
            .ok_or_else(|| SettingsAccessError::UnknownKey {
                key: key.to_string(),
            })
    }

    fn settings_set(
        &mut self,
        key: &str,
        value: SettingsValue,
    ) -> Result<Vec<ConfigIssue>, SettingsAccessError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(SettingsAccessError::UnknownKey {
                key: key.to_string(),
            });
        }

        let patch = match lookup_key(key) {
            Some(info) if info.kind == UpdateKind::Collection => {
                return Err(SettingsAccessError::RequiresToggle {
                    key: info.key.to_string(),
                });
            }
            Some(_) => {
                let raw = match &value {
                    SettingsValue::String(s) => s.clone(),
                    other => other.to_string(),
                };
                parse_assignment(&self.settings(), key, &raw).map_err(|e| access_error(key, e))?
            }
            None => {
                debug!(key = %key, "Storing unrecognized settings key");
                SettingsPatch::new().with_extra(key, value.to_json())
            }
        };

        self.dispatch(SettingsCommand::Update(patch));
        let issues = self.validate();
        for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
            warn!(code = ?issue.code, "{}", issue.message);
        }
        Ok(issues)
    }

    fn settings_keys(&self) -> Vec<String> {
        known_keys().iter().map(|k| k.key.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::settings_mirror::{InMemoryMirror, MirrorError};
    use hive_domain::{DomainPack, Engine, ModelSelection, ReasoningMode};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<SettingsChangeEvent>>,
    }

    impl RecordingLogger {
        fn types(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|e| e.event_type).collect()
        }
    }

    impl SettingsChangeLogger for RecordingLogger {
        fn log(&self, event: SettingsChangeEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    struct BrokenMirror;

    impl SettingsMirrorPort for BrokenMirror {
        fn load(&self, _key: &str) -> Result<Option<String>, MirrorError> {
            Err(MirrorError::Corrupt("not an object".into()))
        }
        fn save(&self, _key: &str, _value: &str) -> Result<(), MirrorError> {
            Err(MirrorError::Unavailable("read-only".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), MirrorError> {
            Err(MirrorError::Unavailable("read-only".into()))
        }
    }

    fn session_with(mirror: Arc<dyn SettingsMirrorPort>) -> SettingsSession {
        SettingsSession::new(SessionConfig::default())
            .with_mirror(mirror)
            .start()
    }

    #[test]
    fn test_start_without_mirror_uses_defaults() {
        let session = SettingsSession::new(SessionConfig::default()).start();
        assert_eq!(*session.settings(), OrchestratorSettings::default());
    }

    #[test]
    fn test_start_restores_mirrored_keys() {
        let mirror = Arc::new(InMemoryMirror::with_entries([
            ("selectedModels", r#"["gpt-5","claude-opus"]"#),
            ("reasoningMode", r#""deep""#),
        ]));
        let session = session_with(mirror);
        let settings = session.settings();
        assert_eq!(settings.selected_models.ids(), vec!["gpt-5", "claude-opus"]);
        assert_eq!(settings.reasoning_mode, ReasoningMode::Deep);
        assert_eq!(settings.accuracy_level, 3);
    }

    #[test]
    fn test_corrupt_mirrored_value_is_discarded_alone() {
        let mirror = Arc::new(InMemoryMirror::with_entries([
            ("selectedModels", "{not json"),
            ("accuracyLevel", r#""high""#),
            ("domainPack", r#""legal""#),
        ]));
        let settings = session_with(mirror).settings();
        assert_eq!(settings.selected_models, ModelSelection::Automatic);
        assert_eq!(settings.accuracy_level, 3);
        assert_eq!(settings.domain_pack, DomainPack::Legal);
    }

    #[test]
    fn test_unreadable_mirror_falls_back_to_defaults() {
        let mut session = session_with(Arc::new(BrokenMirror));
        assert_eq!(*session.settings(), OrchestratorSettings::default());

        // save failures stay inside the session
        let outcome = session.dispatch(SettingsCommand::ToggleModel("gpt-5".into()));
        assert!(outcome.changed());
        assert_eq!(session.settings().selected_models.ids(), vec!["gpt-5"]);
    }

    #[test]
    fn test_dispatch_mirrors_only_configured_keys() {
        let mirror = Arc::new(InMemoryMirror::new());
        let mut session = session_with(mirror.clone());

        session.dispatch(SettingsCommand::ToggleModel("gpt-5".into()));
        session.dispatch(SettingsCommand::ToggleFeature("web-search".into()));

        assert_eq!(
            mirror.load("selectedModels").unwrap().as_deref(),
            Some(r#"["gpt-5"]"#)
        );
        assert_eq!(mirror.load("advancedFeatures").unwrap(), None);
    }

    #[test]
    fn test_mirror_round_trip_across_sessions() {
        let mirror = Arc::new(InMemoryMirror::new());
        let mut first = session_with(mirror.clone());
        first.dispatch(SettingsCommand::Update(SettingsPatch {
            reasoning_mode: Some(ReasoningMode::Fast),
            accuracy_level: Some(5),
            prefer_cheaper: Some(true),
            ..Default::default()
        }));

        let second = session_with(mirror);
        let settings = second.settings();
        assert_eq!(settings.reasoning_mode, ReasoningMode::Fast);
        assert_eq!(settings.accuracy_level, 5);
        // not a mirrored key
        assert!(!settings.prefer_cheaper);
    }

    #[test]
    fn test_change_logger_receives_events() {
        let logger = Arc::new(RecordingLogger::default());
        let mut session = SettingsSession::new(SessionConfig::default())
            .with_change_logger(logger.clone())
            .start();

        session.dispatch(SettingsCommand::ToggleEngine {
            engine: Engine::Hrm,
            enabled: true,
        });
        // unchanged: not logged
        session.dispatch(SettingsCommand::ToggleEngine {
            engine: Engine::Hrm,
            enabled: true,
        });

        assert_eq!(logger.types(), vec!["session_started", "settings_changed"]);
        let events = logger.events.lock().unwrap();
        assert_eq!(events[1].payload["command"], "toggle_engine");
        assert_eq!(events[1].payload["changedKeys"], json!(["enableHRM", "enginesMode"]));
    }

    #[test]
    fn test_new_chat_resets_to_configured_defaults() {
        let config = SessionConfig::new().with_defaults_patch(&SettingsPatch {
            domain_pack: Some(DomainPack::Medical),
            ..Default::default()
        });
        let mut session = SettingsSession::new(config).start();
        session.dispatch(SettingsCommand::ToggleModel("gpt-5".into()));

        let outcome = session.new_chat();
        assert!(outcome.settings.selected_models.is_automatic());
        assert_eq!(outcome.settings.domain_pack, DomainPack::Medical);
    }

    #[test]
    fn test_apply_template() {
        let mut session = SettingsSession::new(SessionConfig::default()).start();
        session.dispatch(SettingsCommand::ToggleModel("gpt-5".into()));

        let outcome = session.apply_template("deep-research").unwrap();
        assert_eq!(outcome.settings.reasoning_mode, ReasoningMode::Deep);
        assert!(outcome.settings.selected_models.is_automatic());
    }

    #[test]
    fn test_apply_configured_template() {
        let config = SessionConfig::new().with_templates([TemplatePreset::new(
            "team-review",
            "Team Review",
            SettingsPatch {
                agent_mode: Some(hive_domain::AgentMode::Team),
                ..Default::default()
            },
        )]);
        let mut session = SettingsSession::new(config).start();
        let outcome = session.apply_template("team-review").unwrap();
        assert!(outcome.settings.agent_mode.is_team());
    }

    #[test]
    fn test_apply_unknown_template() {
        let mut session = SettingsSession::new(SessionConfig::default()).start();
        let err = session.apply_template("nope").unwrap_err();
        assert_eq!(
            err,
            SessionError::Domain(DomainError::UnknownTemplate("nope".into()))
        );
    }

    // ==================== Accessor ====================

    #[test]
    fn test_accessor_get() {
        let session = SettingsSession::new(SessionConfig::default()).start();
        assert_eq!(
            session.settings_get("reasoningMode").unwrap(),
            SettingsValue::String("standard".into())
        );
        assert_eq!(
            session.settings_get("criteria.speed").unwrap(),
            SettingsValue::Integer(60)
        );
        assert_eq!(
            session.settings_get("selectedModels").unwrap(),
            SettingsValue::StringList(vec!["automatic".into()])
        );
        assert!(matches!(
            session.settings_get("nope"),
            Err(SettingsAccessError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_accessor_set_scalar_and_nested() {
        let mut session = SettingsSession::new(SessionConfig::default()).start();
        session
            .settings_set("reasoningMode", SettingsValue::String("deep".into()))
            .unwrap();
        session
            .settings_set("criteria.speed", SettingsValue::Integer(90))
            .unwrap();

        let settings = session.settings();
        assert_eq!(settings.reasoning_mode, ReasoningMode::Deep);
        assert_eq!(settings.criteria.speed, 90);
        assert_eq!(settings.criteria.accuracy, 70);
    }

    #[test]
    fn test_accessor_set_out_of_range_warns() {
        let mut session = SettingsSession::new(SessionConfig::default()).start();
        let issues = session
            .settings_set("accuracyLevel", SettingsValue::Integer(9))
            .unwrap();
        assert_eq!(session.settings().accuracy_level, 9);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_accessor_set_collection_requires_toggle() {
        let mut session = SettingsSession::new(SessionConfig::default()).start();
        let err = session
            .settings_set("selectedModels", SettingsValue::StringList(vec!["gpt-5".into()]))
            .unwrap_err();
        assert_eq!(
            err,
            SettingsAccessError::RequiresToggle {
                key: "selectedModels".into()
            }
        );
    }

    #[test]
    fn test_accessor_set_invalid_value() {
        let mut session = SettingsSession::new(SessionConfig::default()).start();
        let err = session
            .settings_set("reasoningMode", SettingsValue::String("ultra".into()))
            .unwrap_err();
        assert!(matches!(err, SettingsAccessError::InvalidValue { .. }));
        assert_eq!(session.settings().reasoning_mode, ReasoningMode::Standard);
    }

    #[test]
    fn test_accessor_set_unknown_key_is_kept() {
        let mut session = SettingsSession::new(SessionConfig::default()).start();
        session
            .settings_set("experimentalRouting", SettingsValue::Boolean(true))
            .unwrap();
        assert_eq!(
            session.settings().extra.get("experimentalRouting"),
            Some(&json!(true))
        );
        assert_eq!(
            session.settings_get("experimentalRouting").unwrap(),
            SettingsValue::Boolean(true)
        );
    }

    #[test]
    fn test_accessor_keys() {
        let session = SettingsSession::new(SessionConfig::default()).start();
        let keys = session.settings_keys();
        assert!(keys.contains(&"enableHRM".to_string()));
        assert!(keys.contains(&"orchestrationOverrides.maxIterations".to_string()));
    }
}
