//! Configuration file loading for llmhive
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LLMHIVE_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./llmhive.toml` or `./.llmhive.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/llmhive/config.toml`
//! 5. Fallback: `~/.config/llmhive/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileMirrorConfig, FileOutputConfig,
    FileTemplateConfig,
};
pub use loader::ConfigLoader;
