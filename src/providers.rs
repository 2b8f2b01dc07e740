//! LLM provider configuration.
//!
//! Single source of truth for supported providers and their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Google,
    OpenAI,
    DeepSeek,
    Moonshot,
}

impl Provider {
    /// All available providers
    pub const ALL: &'static [Provider] = &[
        Provider::Google,
        Provider::OpenAI,
        Provider::DeepSeek,
        Provider::Moonshot,
    ];

    /// Provider name as used in config files and CLI
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::OpenAI => "openai",
            Self::DeepSeek => "deepseek",
            Self::Moonshot => "moonshot",
        }
    }

    /// Human-readable provider name for UI output
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Google => "Google Gemini",
            Self::OpenAI => "OpenAI",
            Self::DeepSeek => "DeepSeek",
            Self::Moonshot => "Moonshot (Kimi)",
        }
    }

    /// Default model used when none is configured
    pub const fn default_model(&self) -> &'static str {
        match self {
            Self::Google => "gemini-2.5-flash",
            Self::OpenAI => "gpt-4o-mini",
            Self::DeepSeek => "deepseek-chat",
            Self::Moonshot => "moonshot-v1-8k",
        }
    }

    /// Models the provider accepts for study-guide generation
    pub const fn available_models(&self) -> &'static [&'static str] {
        match self {
            Self::Google => &["gemini-2.5-flash", "gemini-2.5-pro"],
            Self::OpenAI => &["gpt-4o-mini", "gpt-4o"],
            Self::DeepSeek => &["deepseek-chat", "deepseek-reasoner"],
            Self::Moonshot => &["moonshot-v1-8k", "moonshot-v1-32k", "moonshot-v1-128k"],
        }
    }

    /// Base URL for the provider's OpenAI-compatible chat completions API.
    ///
    /// `None` for Google, which uses its own `generateContent` endpoint with
    /// a formal response schema instead of the chat completions shape.
    pub const fn chat_completions_base_url(&self) -> Option<&'static str> {
        match self {
            Self::Google => None,
            Self::OpenAI => Some("https://api.openai.com/v1"),
            Self::DeepSeek => Some("https://api.deepseek.com"),
            Self::Moonshot => Some("https://api.moonshot.cn/v1"),
        }
    }

    /// Get all provider names as strings
    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::name).collect()
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        // Handle common aliases
        let normalized = match lower.as_str() {
            "gemini" => "google",
            "kimi" => "moonshot",
            other => other,
        };

        Self::ALL
            .iter()
            .find(|p| p.name() == normalized)
            .copied()
            .ok_or_else(|| ProviderError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Provider configuration error
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Unknown provider: {0}. Supported: google, openai, deepseek, moonshot")]
    Unknown(String),
    #[error("Model '{0}' is not available for provider {1}")]
    UnknownModel(String, Provider),
}

/// Per-provider configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key; may legitimately be empty for an unconfigured provider
    #[serde(default)]
    pub api_key: String,
    /// Model to request; empty means the provider default
    #[serde(default)]
    pub model: String,
}

impl ProviderConfig {
    /// Create config with defaults for a provider
    pub fn with_defaults(provider: Provider) -> Self {
        Self {
            api_key: String::new(),
            model: provider.default_model().to_string(),
        }
    }

    /// Get effective model (configured or default)
    pub fn effective_model(&self, provider: Provider) -> &str {
        if self.model.is_empty() {
            provider.default_model()
        } else {
            &self.model
        }
    }

    /// Check if this config has an API key set
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Validate that a model belongs to the provider's allowed list
pub fn validate_model(provider: Provider, model: &str) -> Result<(), ProviderError> {
    if provider.available_models().contains(&model) {
        Ok(())
    } else {
        Err(ProviderError::UnknownModel(model.to_string(), provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("google".parse::<Provider>().ok(), Some(Provider::Google));
        assert_eq!(
            "DEEPSEEK".parse::<Provider>().ok(),
            Some(Provider::DeepSeek)
        );
        assert_eq!("gemini".parse::<Provider>().ok(), Some(Provider::Google)); // Alias
        assert_eq!("kimi".parse::<Provider>().ok(), Some(Provider::Moonshot)); // Alias
        assert!("invalid".parse::<Provider>().is_err());
    }

    #[test]
    fn test_provider_defaults() {
        assert_eq!(Provider::Google.default_model(), "gemini-2.5-flash");
        assert_eq!(
            Provider::DeepSeek.chat_completions_base_url(),
            Some("https://api.deepseek.com")
        );
        assert_eq!(Provider::Google.chat_completions_base_url(), None);
    }

    #[test]
    fn test_provider_config_defaults() {
        let config = ProviderConfig::with_defaults(Provider::Moonshot);
        assert_eq!(config.model, "moonshot-v1-8k");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_validate_model() {
        assert!(validate_model(Provider::OpenAI, "gpt-4o").is_ok());
        assert!(validate_model(Provider::OpenAI, "deepseek-chat").is_err());
    }

    #[test]
    fn test_effective_model_falls_back_to_default() {
        let config = ProviderConfig::default();
        assert_eq!(config.effective_model(Provider::DeepSeek), "deepseek-chat");
    }
}
