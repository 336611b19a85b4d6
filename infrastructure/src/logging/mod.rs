//! Logging infrastructure: structured settings-change logging.
//!
//! Provides [`JsonlChangeLogger`], a JSONL file writer that implements
//! the [`SettingsChangeLogger`](hive_application::SettingsChangeLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlChangeLogger;
