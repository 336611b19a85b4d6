//! JSON file backed settings mirror.
//!
//! The file holds one JSON object whose members are the mirrored keys:
//!
//! ```json
//! {
//!   "accuracyLevel": 4,
//!   "selectedModels": ["gpt-5", "claude-opus"]
//! }
//! ```
//!
//! Writes go to a sibling temp file that is renamed over the original.

use hive_application::ports::settings_mirror::{MirrorError, SettingsMirrorPort};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

pub struct FileSettingsMirror {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSettingsMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file contents; a missing file reads as empty
    fn read_entries(&self) -> Result<Map<String, Value>, MirrorError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(MirrorError::Corrupt(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(MirrorError::Corrupt(format!("{}: {}", self.path.display(), e))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), MirrorError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(entries)
            .map_err(|e| MirrorError::Unavailable(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Map<String, Value>)) -> Result<(), MirrorError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| MirrorError::Unavailable("mirror lock poisoned".to_string()))?;

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(MirrorError::Corrupt(reason)) => {
                debug!(%reason, "Replacing corrupt mirror file");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl SettingsMirrorPort for FileSettingsMirror {
    fn load(&self, key: &str) -> Result<Option<String>, MirrorError> {
        Ok(self.read_entries()?.get(key).map(Value::to_string))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), MirrorError> {
        let value: Value = serde_json::from_str(value)
            .map_err(|e| MirrorError::Corrupt(format!("value for {key} is not JSON: {e}")))?;
        self.update(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    fn remove(&self, key: &str) -> Result<(), MirrorError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror_in(dir: &tempfile::TempDir) -> FileSettingsMirror {
        FileSettingsMirror::new(dir.path().join("state").join("settings.json"))
    }

    #[test]
    fn test_missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(&dir);
        assert_eq!(mirror.load("selectedModels").unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(&dir);

        mirror.save("selectedModels", r#"["gpt-5","claude-opus"]"#).unwrap();
        mirror.save("accuracyLevel", "4").unwrap();

        assert_eq!(
            mirror.load("selectedModels").unwrap().as_deref(),
            Some(r#"["gpt-5","claude-opus"]"#)
        );
        assert_eq!(mirror.load("accuracyLevel").unwrap().as_deref(), Some("4"));

        // survives a new instance
        let reopened = mirror_in(&dir);
        assert_eq!(reopened.load("accuracyLevel").unwrap().as_deref(), Some("4"));
    }

    #[test]
    fn test_file_is_a_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(&dir);
        mirror.save("reasoningMode", r#""deep""#).unwrap();

        let text = fs::read_to_string(mirror.path()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!({ "reasoningMode": "deep" }));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(&dir);
        mirror.save("domainPack", r#""legal""#).unwrap();
        mirror.remove("domainPack").unwrap();
        mirror.remove("domainPack").unwrap();
        assert_eq!(mirror.load("domainPack").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(&dir);
        fs::create_dir_all(mirror.path().parent().unwrap()).unwrap();
        fs::write(mirror.path(), "{ not json").unwrap();

        assert!(matches!(
            mirror.load("selectedModels"),
            Err(MirrorError::Corrupt(_))
        ));

        // the next save starts over
        mirror.save("accuracyLevel", "2").unwrap();
        assert_eq!(mirror.load("accuracyLevel").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_non_object_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(&dir);
        fs::create_dir_all(mirror.path().parent().unwrap()).unwrap();
        fs::write(mirror.path(), "[1, 2, 3]").unwrap();
        assert!(matches!(mirror.load("x"), Err(MirrorError::Corrupt(_))));
    }

    #[test]
    fn test_non_json_value_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = mirror_in(&dir);
        assert!(mirror.save("reasoningMode", "deep").is_err());
    }
}
