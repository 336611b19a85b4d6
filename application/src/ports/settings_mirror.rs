//! Port for the local settings mirror.
//!
//! A small key-value store that survives restarts. The session writes a
//! configured subset of settings keys to it after each change and reads them
//! back on start. Values are the JSON text of the key's current value.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Errors from mirror operations.
#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("Mirror storage is unavailable: {0}")]
    Unavailable(String),

    #[error("Mirror contents are corrupt: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Port for persisting individual settings keys locally.
pub trait SettingsMirrorPort: Send + Sync {
    /// Stored value for `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, MirrorError>;

    /// Store `value` under `key`, replacing what was there.
    fn save(&self, key: &str, value: &str) -> Result<(), MirrorError>;

    /// Forget `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), MirrorError>;
}

/// Mirror that stores nothing; every load is a miss.
pub struct NoMirror;

impl SettingsMirrorPort for NoMirror {
    fn load(&self, _key: &str) -> Result<Option<String>, MirrorError> {
        Ok(None)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), MirrorError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), MirrorError> {
        Ok(())
    }
}

/// Process-local mirror, for tests and embedders without a filesystem.
#[derive(Default)]
pub struct InMemoryMirror {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror pre-populated with `entries`
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, MirrorError> {
        self.entries
            .lock()
            .map_err(|_| MirrorError::Unavailable("mirror lock poisoned".to_string()))
    }
}

impl SettingsMirrorPort for InMemoryMirror {
    fn load(&self, key: &str) -> Result<Option<String>, MirrorError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), MirrorError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), MirrorError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_mirror_always_misses() {
        let mirror = NoMirror;
        mirror.save("reasoningMode", "\"deep\"").unwrap();
        assert_eq!(mirror.load("reasoningMode").unwrap(), None);
    }

    #[test]
    fn test_in_memory_round_trip() {
        let mirror = InMemoryMirror::new();
        mirror.save("accuracyLevel", "4").unwrap();
        assert_eq!(mirror.load("accuracyLevel").unwrap().as_deref(), Some("4"));
        mirror.remove("accuracyLevel").unwrap();
        mirror.remove("accuracyLevel").unwrap();
        assert_eq!(mirror.load("accuracyLevel").unwrap(), None);
    }
}
