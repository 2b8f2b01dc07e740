use crate::config::Config;
use crate::providers::{Provider, validate_model};
use anyhow::Result;
use clap::Args;

#[derive(Args, Clone, Default, Debug)]
pub struct CommonParams {
    /// Override the active LLM provider for this invocation
    #[arg(long, help = "Override the active LLM provider", value_parser = available_providers_parser)]
    pub provider: Option<String>,

    /// Override the model for this invocation
    #[arg(
        long,
        help = "Override the model (must belong to the provider's model list)"
    )]
    pub model: Option<String>,
}

impl CommonParams {
    /// Apply overrides to a loaded config, validating the model choice.
    ///
    /// Returns true if any changes were made.
    pub fn apply_to_config(&self, config: &mut Config) -> Result<bool> {
        let mut changes_made = false;

        if let Some(provider_str) = &self.provider {
            let provider: Provider = provider_str.parse()?;
            if config.active_provider() != provider {
                config.set_active_provider(provider);
                changes_made = true;
            }
        }

        if let Some(model) = &self.model {
            let provider = config.active_provider();
            validate_model(provider, model)?;
            let provider_config = config.provider_config_mut(provider);
            if provider_config.model != *model {
                provider_config.model.clone_from(model);
                changes_made = true;
            }
        }

        Ok(changes_made)
    }
}

/// Validates that a provider name is available in the system
pub fn available_providers_parser(s: &str) -> Result<String, String> {
    match s.parse::<Provider>() {
        Ok(provider) => Ok(provider.name().to_string()),
        Err(_) => Err(format!(
            "Invalid provider '{}'. Available providers: {}",
            s,
            Provider::all_names().join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_provider_and_model_override() {
        let mut config = Config::default();
        let params = CommonParams {
            provider: Some("deepseek".to_string()),
            model: Some("deepseek-reasoner".to_string()),
        };
        assert!(params.apply_to_config(&mut config).expect("apply succeeds"));
        assert_eq!(config.active_provider(), Provider::DeepSeek);
        assert_eq!(
            config.provider_config(Provider::DeepSeek).model,
            "deepseek-reasoner"
        );
    }

    #[test]
    fn test_model_must_belong_to_provider() {
        let mut config = Config::default();
        let params = CommonParams {
            provider: Some("openai".to_string()),
            model: Some("gemini-2.5-pro".to_string()),
        };
        assert!(params.apply_to_config(&mut config).is_err());
    }

    #[test]
    fn test_providers_parser_rejects_unknown() {
        assert!(available_providers_parser("google").is_ok());
        assert!(available_providers_parser("skynet").is_err());
    }
}
