//! Runtime settings access port.
//!
//! Provides a uniform interface for reading and writing settings keys by
//! their wire name. Used by the CLI `get` / `set` / `keys` commands.

use hive_domain::ConfigIssue;
use serde_json::Value;

/// A dynamically-typed settings value.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    StringList(Vec<String>),
    /// Anything else (nested records, mixed arrays, null)
    Json(Value),
}

impl SettingsValue {
    pub fn to_json(&self) -> Value {
        match self {
            SettingsValue::String(s) => Value::String(s.clone()),
            SettingsValue::Integer(n) => Value::from(*n),
            SettingsValue::Number(n) => Value::from(*n),
            SettingsValue::Boolean(b) => Value::Bool(*b),
            SettingsValue::StringList(list) => Value::from(list.clone()),
            SettingsValue::Json(value) => value.clone(),
        }
    }

    /// Parse CLI text: JSON literals (`true`, `3`, `["a"]`, `{..}`) are taken
    /// as such, anything else as a plain string.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw.trim()) {
            Ok(value) => SettingsValue::from(value),
            Err(_) => SettingsValue::String(raw.to_string()),
        }
    }
}

impl From<Value> for SettingsValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => SettingsValue::Boolean(b),
            Value::String(s) => SettingsValue::String(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => SettingsValue::Integer(i),
                None => match n.as_f64() {
                    Some(f) => SettingsValue::Number(f),
                    None => SettingsValue::Json(Value::Number(n)),
                },
            },
            Value::Array(items) if items.iter().all(Value::is_string) => SettingsValue::StringList(
                items
                    .into_iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            other => SettingsValue::Json(other),
        }
    }
}

impl std::fmt::Display for SettingsValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsValue::String(s) => write!(f, "{}", s),
            SettingsValue::Integer(n) => write!(f, "{}", n),
            SettingsValue::Number(n) => write!(f, "{}", n),
            SettingsValue::Boolean(b) => write!(f, "{}", b),
            SettingsValue::StringList(list) => write!(f, "[{}]", list.join(", ")),
            SettingsValue::Json(value) => write!(f, "{}", value),
        }
    }
}

/// Errors from settings access operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAccessError {
    /// The key is not recognized.
    UnknownKey { key: String },
    /// The key holds a collection and only changes through toggle commands.
    RequiresToggle { key: String },
    /// The provided value is invalid for this key.
    InvalidValue { key: String, message: String },
}

impl std::fmt::Display for SettingsAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsAccessError::UnknownKey { key } => write!(f, "unknown settings key: {}", key),
            SettingsAccessError::RequiresToggle { key } => {
                write!(f, "settings key '{}' can only be changed with a toggle command", key)
            }
            SettingsAccessError::InvalidValue { key, message } => {
                write!(f, "invalid value for '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for SettingsAccessError {}

/// Port for runtime settings access.
///
/// Implementors provide get/set for settings keys, enforcing update
/// constraints and returning validation issues on set.
pub trait SettingsAccessorPort {
    /// Get the current value of a settings key.
    fn settings_get(&self, key: &str) -> Result<SettingsValue, SettingsAccessError>;

    /// Set a settings key to a new value.
    ///
    /// Returns validation warnings (if any) on success. Keys outside the
    /// registry are stored as unknown keys rather than rejected.
    fn settings_set(
        &mut self,
        key: &str,
        value: SettingsValue,
    ) -> Result<Vec<ConfigIssue>, SettingsAccessError>;

    /// List all known settings key names.
    fn settings_keys(&self) -> Vec<String>;
}
