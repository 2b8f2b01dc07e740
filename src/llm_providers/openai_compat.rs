use super::AnalysisHandler;
use crate::llm::{AnalysisError, parse_guide, provider_error_message};
use crate::log_debug;
use crate::prompt;
use crate::providers::Provider;
use crate::types::StudyGuide;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Requested sampling temperature; low for consistent structured output
const TEMPERATURE: f64 = 0.3;

/// Prompt-embedded-schema handler for OpenAI-style chat completion APIs.
///
/// DeepSeek and Moonshot expose the same endpoint shape as OpenAI at their
/// own base URLs, so one handler covers all three. The target JSON shape is
/// described inside the system message and enforced only best-effort via
/// `response_format: {"type": "json_object"}`.
pub struct OpenAiCompatHandler {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatHandler {
    /// Creates a handler for one of the OpenAI-compatible providers
    pub fn new(provider: Provider, api_key: String, model: String) -> Self {
        let base_url = provider
            .chat_completions_base_url()
            .expect("provider exposes a chat completions endpoint")
            .to_string();
        Self {
            api_key,
            model,
            base_url,
            client: Client::new(),
        }
    }

    /// Overrides the API base URL (used by tests against a mock server)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl AnalysisHandler for OpenAiCompatHandler {
    async fn analyze(&self, article: &str) -> Result<StudyGuide, AnalysisError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: format!("{}\n{}", prompt::SYSTEM_INSTRUCTION, prompt::JSON_SHAPE_EXAMPLE),
                },
                ChatMessage {
                    role: "user",
                    content: prompt::user_prompt(article),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: TEMPERATURE,
        };

        log_debug!(
            "Sending chat completion request to {} (model: {})",
            self.base_url,
            self.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = provider_error_message(&body).unwrap_or(body);
            return Err(AnalysisError::Transport {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
            .ok_or(AnalysisError::EmptyResponse)?;

        parse_guide(content)
    }
}
