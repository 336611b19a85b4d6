//! Watch-channel backed settings store.

use super::command::SettingsCommand;
use hive_domain::OrchestratorSettings;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Result of dispatching one command.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Snapshot after the command
    pub settings: Arc<OrchestratorSettings>,
    /// Wire names of top-level keys whose value changed
    pub changed_keys: Vec<String>,
}

impl DispatchOutcome {
    pub fn changed(&self) -> bool {
        !self.changed_keys.is_empty()
    }
}

/// Single owner of the live settings.
///
/// Every published value is a fresh `Arc`, so readers can tell snapshots
/// apart by pointer. There is one writer (`dispatch` takes `&mut self`) and
/// any number of readers holding a [`watch::Receiver`].
pub struct SettingsStore {
    tx: watch::Sender<Arc<OrchestratorSettings>>,
    defaults: Arc<OrchestratorSettings>,
}

impl SettingsStore {
    /// Create a store whose current settings are `defaults`
    pub fn new(defaults: OrchestratorSettings) -> Self {
        let defaults = Arc::new(defaults);
        let (tx, _rx) = watch::channel(Arc::clone(&defaults));
        Self { tx, defaults }
    }

    /// Settings `Reset` and `ApplyTemplate` start from
    pub fn defaults(&self) -> &OrchestratorSettings {
        &self.defaults
    }

    /// Current settings
    pub fn snapshot(&self) -> Arc<OrchestratorSettings> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receiver notified each time the settings change
    pub fn subscribe(&self) -> watch::Receiver<Arc<OrchestratorSettings>> {
        self.tx.subscribe()
    }

    /// Apply one command to the current settings.
    ///
    /// Readers are only notified when some key actually changed.
    pub fn dispatch(&mut self, command: SettingsCommand) -> DispatchOutcome {
        let current = self.snapshot();
        let next = command.apply(&current, &self.defaults);
        let changed_keys = current.changed_keys(&next);

        if changed_keys.is_empty() {
            debug!(command = command.name(), "Settings unchanged");
            return DispatchOutcome {
                settings: current,
                changed_keys,
            };
        }

        let next = Arc::new(next);
        self.tx.send_replace(Arc::clone(&next));
        debug!(
            command = command.name(),
            changed = ?changed_keys,
            "Settings updated"
        );
        DispatchOutcome {
            settings: next,
            changed_keys,
        }
    }

    /// Apply commands strictly in order; each one sees the result of the
    /// previous.
    pub fn dispatch_all(
        &mut self,
        commands: impl IntoIterator<Item = SettingsCommand>,
    ) -> Vec<DispatchOutcome> {
        commands
            .into_iter()
            .map(|command| self.dispatch(command))
            .collect()
    }
}
