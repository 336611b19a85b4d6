//! Infrastructure layer for llmhive
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod mirror;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileMirrorConfig,
    FileOutputConfig, FileTemplateConfig,
};
pub use logging::JsonlChangeLogger;
pub use mirror::FileSettingsMirror;
