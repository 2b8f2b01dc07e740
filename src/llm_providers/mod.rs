//! Provider-specific request builders and response parsers.
//!
//! Two strategies cover the whole provider set:
//! - [`gemini`]: structured-schema requests against the Gemini
//!   `generateContent` endpoint, with a formal response schema.
//! - [`openai_compat`]: chat completion requests with the JSON shape
//!   described inside the prompt, shared by OpenAI, DeepSeek and Moonshot.
//!
//! Handlers are stateless and constructed per call.

use crate::llm::AnalysisError;
use crate::providers::Provider;
use crate::types::StudyGuide;
use async_trait::async_trait;

pub mod gemini;
pub mod openai_compat;

pub use gemini::GeminiHandler;
pub use openai_compat::OpenAiCompatHandler;

/// One analysis attempt against a concrete provider API
#[async_trait]
pub trait AnalysisHandler: Send + Sync {
    /// Issues a single HTTP request and parses the response into a guide
    async fn analyze(&self, article: &str) -> Result<StudyGuide, AnalysisError>;
}

/// Selects the handler strategy for a provider
pub fn create_handler(
    provider: Provider,
    api_key: String,
    model: String,
) -> Box<dyn AnalysisHandler> {
    match provider {
        Provider::Google => Box::new(GeminiHandler::new(api_key, model)),
        Provider::OpenAI | Provider::DeepSeek | Provider::Moonshot => {
            Box::new(OpenAiCompatHandler::new(provider, api_key, model))
        }
    }
}
