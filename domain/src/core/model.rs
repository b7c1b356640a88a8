//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// Each model belongs to a [`ModelProvider`], which determines how failures
/// are classified. Locally hosted models (the `jan:` prefix) require the
/// runtime to be started and the model loaded before they can answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Claude models
    ClaudeSonnet45,
    ClaudeHaiku45,
    // GPT models
    Gpt51,
    Gpt5Mini,
    Gpt41,
    // Gemini models
    Gemini3Pro,
    // Locally hosted model served by a Jan runtime
    JanLocal(String),
    // Custom
    Custom(String),
}

/// Provider behind a model (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Anthropic,
    OpenAi,
    Google,
    Jan,
    Other,
}

impl ModelProvider {
    pub fn as_str(&self) -> &str {
        match self {
            ModelProvider::Anthropic => "anthropic",
            ModelProvider::OpenAi => "openai",
            ModelProvider::Google => "google",
            ModelProvider::Jan => "jan",
            ModelProvider::Other => "other",
        }
    }

    /// Whether this provider runs a local runtime that must be started
    /// and have the model activated before it can serve requests.
    ///
    /// Failures against such a provider are classified as
    /// [`QueryError::ModelNotActive`](crate::QueryError::ModelNotActive)
    /// rather than a generic provider error.
    pub fn requires_activation(&self) -> bool {
        matches!(self, ModelProvider::Jan)
    }
}

impl std::fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet45 => "claude-sonnet-4.5",
            Model::ClaudeHaiku45 => "claude-haiku-4.5",
            Model::Gpt51 => "gpt-5.1",
            Model::Gpt5Mini => "gpt-5-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::JanLocal(s) => s,
            Model::Custom(s) => s,
        }
    }

    /// Get the provider serving this model
    pub fn provider(&self) -> ModelProvider {
        match self {
            Model::ClaudeSonnet45 | Model::ClaudeHaiku45 => ModelProvider::Anthropic,
            Model::Gpt51 | Model::Gpt5Mini | Model::Gpt41 => ModelProvider::OpenAi,
            Model::Gemini3Pro => ModelProvider::Google,
            Model::JanLocal(_) => ModelProvider::Jan,
            Model::Custom(_) => ModelProvider::Other,
        }
    }
}

impl Default for Model {
    /// Returns the default model (GPT-5.1)
    fn default() -> Self {
        Model::Gpt51
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Model::JanLocal(name) = self {
            write!(f, "jan:{}", name)
        } else {
            write!(f, "{}", self.as_str())
        }
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix("jan:") {
            return Ok(Model::JanLocal(name.to_string()));
        }
        Ok(match s {
            "claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "claude-haiku-4.5" => Model::ClaudeHaiku45,
            "gpt-5.1" => Model::Gpt51,
            "gpt-5-mini" => Model::Gpt5Mini,
            "gpt-4.1" => Model::Gpt41,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().expect("Model::from_str is infallible"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_known_models() {
        for name in [
            "claude-sonnet-4.5",
            "gpt-5.1",
            "gpt-5-mini",
            "gemini-3-pro-preview",
        ] {
            let model: Model = name.parse().unwrap();
            assert_eq!(model.to_string(), name);
        }
    }

    #[test]
    fn test_jan_prefix_parses_to_local_model() {
        let model: Model = "jan:llama-3.2-3b".parse().unwrap();
        assert_eq!(model, Model::JanLocal("llama-3.2-3b".to_string()));
        assert_eq!(model.to_string(), "jan:llama-3.2-3b");
        assert_eq!(model.provider(), ModelProvider::Jan);
    }

    #[test]
    fn test_unknown_model_becomes_custom() {
        let model: Model = "mystery-model".parse().unwrap();
        assert_eq!(model, Model::Custom("mystery-model".to_string()));
        assert_eq!(model.provider(), ModelProvider::Other);
    }

    #[test]
    fn test_only_jan_requires_activation() {
        assert!(ModelProvider::Jan.requires_activation());
        assert!(!ModelProvider::Anthropic.requires_activation());
        assert!(!ModelProvider::OpenAi.requires_activation());
        assert!(!ModelProvider::Google.requires_activation());
        assert!(!ModelProvider::Other.requires_activation());
    }

    #[test]
    fn test_serde_uses_display_form() {
        let json = serde_json::to_string(&Model::JanLocal("phi-4".into())).unwrap();
        assert_eq!(json, "\"jan:phi-4\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::JanLocal("phi-4".into()));
    }
}
