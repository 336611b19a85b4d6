//! Application layer for llmhive
//!
//! This crate contains the settings store, the session controller, port
//! definitions, and application configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod store;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MIRROR_KEYS, SessionConfig};
pub use ports::{
    change_logger::{NoChangeLogger, SettingsChangeEvent, SettingsChangeLogger},
    settings_accessor::{SettingsAccessError, SettingsAccessorPort, SettingsValue},
    settings_mirror::{InMemoryMirror, MirrorError, NoMirror, SettingsMirrorPort},
};
pub use store::{DispatchOutcome, SettingsCommand, SettingsStore};
pub use use_cases::session::{SessionError, SettingsSession};
pub use use_cases::submission::{CLIENT_VERSION, ChatSubmission, SubmissionError};
