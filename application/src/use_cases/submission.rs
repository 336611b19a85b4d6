//! Chat submission payload.
//!
//! Builds the body the chat backend receives with each prompt. Settings are
//! sent clamped; validation warnings are logged here and never sent.

use hive_domain::{OrchestratorSettings, Severity, validate};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Version string sent as `clientVersion`
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Failed to encode submission: {0}")]
    Encode(String),
}

/// Outbound chat request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSubmission {
    pub prompt: String,
    pub settings: OrchestratorSettings,
    pub client_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatSubmission {
    /// Build a submission for `prompt` with the current settings.
    pub fn new(prompt: impl Into<String>, settings: &OrchestratorSettings) -> Result<Self, SubmissionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(SubmissionError::EmptyPrompt);
        }

        for issue in validate(settings) {
            match issue.severity {
                Severity::Warning => warn!(code = ?issue.code, "{}", issue.message),
                Severity::Error => warn!(code = ?issue.code, "{} (sending default)", issue.message),
            }
        }

        Ok(Self {
            prompt,
            settings: settings.clamped(),
            client_version: CLIENT_VERSION,
            conversation_id: None,
        })
    }

    pub fn with_conversation_id(mut self, id: impl Into<String>) -> Self {
        self.conversation_id = Some(id.into());
        self
    }

    pub fn to_json(&self) -> Result<Value, SubmissionError> {
        serde_json::to_value(self).map_err(|e| SubmissionError::Encode(e.to_string()))
    }
}
