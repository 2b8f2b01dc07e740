//! Analysis façade: dispatches one article to the configured provider
//! and normalizes the response into a [`StudyGuide`].

use crate::config::Config;
use crate::llm_providers::create_handler;
use crate::log_debug;
use crate::types::StudyGuide;

/// Minimum article length the CLI accepts before issuing a request
pub const MIN_ARTICLE_CHARS: usize = 50;

/// Failure modes of one analysis attempt.
///
/// The façade performs no recovery: every error is surfaced to the caller,
/// which displays it and lets the user retry by re-running the command.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The active provider has no API key configured; no request was made
    #[error("No API key configured for {provider}. Set one with `lexiband config --provider {provider} --api-key <KEY>`")]
    MissingCredential { provider: &'static str },

    /// The provider answered with a non-2xx status
    #[error("Provider returned HTTP {status}: {message}")]
    Transport { status: u16, message: String },

    /// The provider response carried no textual content
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// The returned content could not be parsed as a study guide
    #[error("AI response was not valid JSON")]
    MalformedJson,

    /// Network-level failure from the HTTP client, propagated unchanged
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Analyzes an article with the provider selected in `config`.
///
/// Exactly one attempt per invocation: no retries, no backoff, no partial
/// results. If the active provider's API key is empty this fails with
/// [`AnalysisError::MissingCredential`] before any network call.
pub async fn analyze_article(article: &str, config: &Config) -> Result<StudyGuide, AnalysisError> {
    let provider = config.active_provider();
    let settings = config.provider_config(provider);

    if !settings.has_api_key() {
        return Err(AnalysisError::MissingCredential {
            provider: provider.name(),
        });
    }

    let model = settings.effective_model(provider).to_string();
    log_debug!(
        "Dispatching analysis to {} (model: {}, article: {} chars)",
        provider,
        model,
        article.len()
    );

    let handler = create_handler(provider, settings.api_key.clone(), model);
    handler.analyze(article).await
}

/// Parses provider content into a guide, logging the raw content on failure
pub(crate) fn parse_guide(content: &str) -> Result<StudyGuide, AnalysisError> {
    serde_json::from_str(content).map_err(|e| {
        log_debug!("Study guide parse error: {} content: {}", e, content);
        AnalysisError::MalformedJson
    })
}

/// Extracts the `error.message` field from a provider error body, if present.
///
/// Both the Gemini and the OpenAI-compatible APIs use the same
/// `{"error": {"message": "..."}}` envelope for failures.
pub(crate) fn provider_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value["error"]["message"].as_str().map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Provider;

    #[test]
    fn test_provider_error_message_extraction() {
        let body = r#"{"error":{"message":"invalid key","type":"auth_error"}}"#;
        assert_eq!(provider_error_message(body).as_deref(), Some("invalid key"));
        assert_eq!(provider_error_message("not json"), None);
        assert_eq!(provider_error_message(r#"{"detail":"nope"}"#), None);
    }

    #[test]
    fn test_parse_guide_rejects_invalid_json() {
        assert!(matches!(
            parse_guide("I refuse to answer in JSON."),
            Err(AnalysisError::MalformedJson)
        ));
    }

    #[test]
    fn test_missing_credential_names_provider() {
        let err = AnalysisError::MissingCredential {
            provider: Provider::DeepSeek.name(),
        };
        assert!(err.to_string().contains("deepseek"));
    }
}
