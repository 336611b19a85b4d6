//! Port for structured settings-change logging.
//!
//! Defines the [`SettingsChangeLogger`] trait for recording settings events
//! (session start, applied commands, resets) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail of settings changes in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured settings event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. Adapters add the timestamp when writing.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsChangeEvent {
    /// Event type identifier (e.g., "session_started", "settings_changed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SettingsChangeEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging settings events to a structured log.
///
/// `log` is synchronous and infallible; adapters swallow their own write
/// failures.
pub trait SettingsChangeLogger: Send + Sync {
    /// Record a settings event.
    fn log(&self, event: SettingsChangeEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoChangeLogger;

impl SettingsChangeLogger for NoChangeLogger {
    fn log(&self, _event: SettingsChangeEvent) {}
}
