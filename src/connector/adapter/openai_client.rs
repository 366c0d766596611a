use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::CompletionClient;
use crate::domain::{Choice, Completion, DomainError, Message};

/// Default target: the OpenAI cloud API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: Option<ApiChoiceMessage>,
}

#[derive(Deserialize)]
struct ApiChoiceMessage {
    content: Option<String>,
}

impl From<ApiResponse> for Completion {
    fn from(response: ApiResponse) -> Self {
        Completion::new(
            response
                .choices
                .into_iter()
                .map(|c| match c.message.and_then(|m| m.content) {
                    Some(text) => Choice::new(text),
                    None => Choice::empty(),
                })
                .collect(),
        )
    }
}

/// HTTP client for OpenAI-compatible `/v1/chat/completions` endpoints
/// (OpenAI, vLLM, Ollama, LM Studio, llama.cpp server, ...).
///
/// Configure through the environment:
///
/// ```text
/// OPENAI_BASE_URL=http://localhost:11434
/// OPENAI_API_KEY=sk-...
/// OPENAI_MODEL=qwen2.5:7b
/// ```
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `OPENAI_BASE_URL` | `https://api.openai.com` |
    /// | `OPENAI_MODEL`    | `gpt-4o-mini`            |
    /// | `OPENAI_API_KEY`  | `""` (empty)             |
    pub fn from_env() -> Self {
        let base = std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        Self::new(key, model, base)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<Completion, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| ApiMessage {
                    role: m.role().as_str(),
                    content: m.content(),
                })
                .collect(),
        };

        let mut builder = self.client.post(&self.url).json(&request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("OpenAiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "OpenAiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("OpenAiClient: failed to parse response: {e}"))
        })?;

        debug!("OpenAiClient: {} choices", api_response.choices.len());
        Ok(api_response.into())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
