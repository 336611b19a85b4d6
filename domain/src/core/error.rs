//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Merging and toggling never fail; these errors only surface where text
/// crosses into the domain (config keys, CLI arguments, preset names).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown settings key: {0}")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Settings key '{0}' holds a collection; use a toggle command instead")]
    ReadModifyWrite(String),

    #[error("Unknown template preset: {0}")]
    UnknownTemplate(String),

    #[error("Unknown engine: {0}")]
    UnknownEngine(String),
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidValue`].
    pub fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by a key the registry does not know
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, DomainError::UnknownKey(_))
    }
}
