//! Model identifier value object

use serde::{Deserialize, Serialize};

/// Identifier of a backend model (Value Object)
///
/// The backend owns the model catalog, so identifiers are open strings.
/// Surrounding whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

/// Provider family a model identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Claude,
    Gpt,
    Gemini,
    Other,
}

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.len() == id.len() {
            Self(id)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Detect the provider family from the identifier prefix
    pub fn family(&self) -> ModelFamily {
        let id = self.0.to_ascii_lowercase();
        if id.starts_with("claude") {
            ModelFamily::Claude
        } else if id.starts_with("gpt") || id.starts_with("o1") || id.starts_with("o3") {
            ModelFamily::Gpt
        } else if id.starts_with("gemini") {
            ModelFamily::Gemini
        } else {
            ModelFamily::Other
        }
    }
}

impl ModelFamily {
    pub fn label(&self) -> &'static str {
        match self {
            ModelFamily::Claude => "Anthropic",
            ModelFamily::Gpt => "OpenAI",
            ModelFamily::Gemini => "Google",
            ModelFamily::Other => "Other",
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        ModelId::new(s)
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        ModelId::new(s)
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_whitespace() {
        let model = ModelId::new("  gpt-5 ");
        assert_eq!(model.as_str(), "gpt-5");
        assert_eq!(model.to_string(), "gpt-5");
    }

    #[test]
    fn test_model_family_detection() {
        assert_eq!(ModelId::new("claude-opus").family(), ModelFamily::Claude);
        assert_eq!(ModelId::new("gpt-5").family(), ModelFamily::Gpt);
        assert_eq!(ModelId::new("Gemini-2.5-pro").family(), ModelFamily::Gemini);
        assert_eq!(ModelId::new("llama-3.3-70b").family(), ModelFamily::Other);
    }

    #[test]
    fn test_serialize_transparent() {
        let json = serde_json::to_string(&ModelId::new("gpt-5")).unwrap();
        assert_eq!(json, "\"gpt-5\"");
    }
}
