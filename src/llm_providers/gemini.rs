use super::AnalysisHandler;
use crate::llm::{AnalysisError, parse_guide, provider_error_message};
use crate::log_debug;
use crate::prompt;
use crate::types::StudyGuide;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Structured-schema handler for the Gemini `generateContent` API.
///
/// The response shape is enforced with a formal `responseSchema`, so the
/// returned text is expected to already be a pure JSON study guide.
pub struct GeminiHandler {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiHandler {
    /// Creates a handler for the given credentials and model
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
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
impl AnalysisHandler for GeminiHandler {
    async fn analyze(&self, article: &str) -> Result<StudyGuide, AnalysisError> {
        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {"text": prompt::user_prompt(article)}
                    ]
                }
            ],
            "systemInstruction": {
                "parts": [
                    {"text": prompt::SYSTEM_INSTRUCTION}
                ]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt::gemini_response_schema()
            }
        });

        let api_url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        log_debug!("Sending generateContent request for model {}", self.model);

        let response = self
            .client
            .post(api_url)
            .header("Content-Type", "application/json")
            .json(&request_body)
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

        // Response shape: candidates[0].content.parts[0].text
        let response_body: serde_json::Value = response.json().await?;
        let content = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .filter(|text| !text.is_empty())
            .ok_or(AnalysisError::EmptyResponse)?;

        parse_guide(content)
    }
}
