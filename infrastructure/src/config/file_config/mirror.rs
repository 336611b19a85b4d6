//! Mirror configuration from TOML (`[mirror]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw mirror configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMirrorConfig {
    /// Persist mirrored keys between runs
    pub enabled: bool,
    /// Mirror file (defaults to the platform data directory)
    pub path: Option<PathBuf>,
    /// Top-level keys to mirror (defaults to the built-in list)
    pub keys: Option<Vec<String>>,
}

impl Default for FileMirrorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            keys: None,
        }
    }
}

impl FileMirrorConfig {
    /// Configured path, or `$XDG_DATA_HOME/llmhive/settings.json`
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("llmhive").join("settings.json")))
    }
}
