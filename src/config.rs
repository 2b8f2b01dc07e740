//! Settings store: active provider, model choice, and per-provider API keys.
//!
//! Persisted as TOML in the user config directory. Loading is tolerant:
//! absent or corrupt files fall back to defaults, and unknown provider names
//! left behind by hand edits are replaced with the default provider. API
//! keys are stored in plaintext and never leave the local machine except as
//! credentials for the provider they belong to.

use crate::providers::{Provider, ProviderConfig};
use crate::{log_debug, log_warn};

use anyhow::{Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration structure for the lexiband application
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Active LLM provider
    #[serde(default = "default_provider_name")]
    pub default_provider: String,
    /// Provider-specific configurations
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

fn default_provider_name() -> String {
    Provider::default().name().to_string()
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// Merges persisted values over defaults; a missing or unparseable file
    /// yields the default configuration rather than an error.
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::get_config_path()?);
        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from an explicit path
    pub fn load_from(path: &Path) -> Self {
        let config = match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(config) => config,
                Err(e) => {
                    log_warn!("Ignoring corrupt config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };
        config.normalized()
    }

    /// Save the configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Save the configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_content = toml::to_string(self)?;
        fs::write(path, config_content)?;
        log_debug!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Get the path to the configuration file
    fn get_config_path() -> Result<PathBuf> {
        let mut path =
            config_dir().ok_or_else(|| anyhow!("Unable to determine config directory"))?;
        path.push("lexiband");
        fs::create_dir_all(&path)?;
        path.push("config.toml");
        Ok(path)
    }

    /// The active provider.
    ///
    /// `normalized()` guarantees `default_provider` parses, so this cannot
    /// fail for a loaded config.
    pub fn active_provider(&self) -> Provider {
        self.default_provider.parse().unwrap_or_default()
    }

    /// Get the configuration for a provider, guaranteed present after load
    pub fn provider_config(&self, provider: Provider) -> &ProviderConfig {
        static EMPTY: std::sync::LazyLock<ProviderConfig> =
            std::sync::LazyLock::new(ProviderConfig::default);
        self.providers.get(provider.name()).unwrap_or(&EMPTY)
    }

    /// Get a mutable configuration entry for a provider
    pub fn provider_config_mut(&mut self, provider: Provider) -> &mut ProviderConfig {
        self.providers
            .entry(provider.name().to_string())
            .or_insert_with(|| ProviderConfig::with_defaults(provider))
    }

    /// Switch the active provider
    pub fn set_active_provider(&mut self, provider: Provider) {
        self.default_provider = provider.name().to_string();
        self.provider_config_mut(provider);
    }

    /// Replace unknown provider names and fill in missing provider entries
    fn normalized(mut self) -> Self {
        if self.default_provider.parse::<Provider>().is_err() {
            log_warn!(
                "Unknown provider '{}' in config, falling back to {}",
                self.default_provider,
                Provider::default()
            );
            self.default_provider = Provider::default().name().to_string();
        }
        for provider in Provider::ALL {
            self.providers
                .entry(provider.name().to_string())
                .or_insert_with(|| ProviderConfig::with_defaults(*provider));
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        let providers = Provider::ALL
            .iter()
            .map(|p| (p.name().to_string(), ProviderConfig::with_defaults(*p)))
            .collect();

        Self {
            default_provider: Provider::default().name().to_string(),
            providers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_covers_all_providers() {
        let config = Config::default();
        assert_eq!(config.active_provider(), Provider::Google);
        for provider in Provider::ALL {
            assert!(config.providers.contains_key(provider.name()));
        }
    }

    #[test]
    fn test_normalize_recovers_unknown_provider() {
        let config = Config {
            default_provider: "skynet".to_string(),
            providers: HashMap::new(),
        }
        .normalized();
        assert_eq!(config.active_provider(), Provider::Google);
        assert!(config.providers.contains_key("moonshot"));
    }

    #[test]
    fn test_set_active_provider_creates_entry() {
        let mut config = Config {
            default_provider: "google".to_string(),
            providers: HashMap::new(),
        };
        config.set_active_provider(Provider::DeepSeek);
        assert_eq!(config.active_provider(), Provider::DeepSeek);
        assert_eq!(
            config.provider_config(Provider::DeepSeek).model,
            "deepseek-chat"
        );
    }
}
