use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::CompletionClient;
use crate::domain::{Choice, Completion, DomainError, Message, Role};

/// Default target: LM Studio running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1234";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-haiku-4-5";
const MAX_TOKENS: u32 = 2048;

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
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
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl From<ApiResponse> for Completion {
    /// The Messages API returns a single answer split into blocks; text blocks
    /// are joined into one choice.
    fn from(response: ApiResponse) -> Self {
        let text: String = response
            .content
            .into_iter()
            .filter_map(|b| b.text)
            .collect();
        if text.is_empty() {
            Completion::default()
        } else {
            Completion::new(vec![Choice::new(text)])
        }
    }
}

/// HTTP client for the Anthropic Messages API (and compatible endpoints such as
/// LM Studio).
///
/// System messages are lifted into the top-level `system` field; the rest are
/// sent as the conversation. Each completion is exactly one `POST`.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
}

impl AnthropicClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{MESSAGES_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables with local-first defaults:
    ///
    /// | Variable             | Default                 |
    /// |----------------------|-------------------------|
    /// | `ANTHROPIC_BASE_URL` | `http://localhost:1234` |
    /// | `ANTHROPIC_MODEL`    | `claude-haiku-4-5`      |
    /// | `ANTHROPIC_API_KEY`  | `""` (empty)            |
    pub fn from_env() -> Self {
        let base = std::env::var("ANTHROPIC_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("ANTHROPIC_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let key = std::env::var("ANTHROPIC_API_KEY").unwrap_or_default();
        Self::new(key, model, base)
    }

    fn split_system(messages: &[Message]) -> (String, Vec<ApiMessage<'_>>) {
        let system = messages
            .iter()
            .filter(|m| m.role() == Role::System)
            .map(Message::content)
            .collect::<Vec<_>>()
            .join("\n\n");
        let rest = messages
            .iter()
            .filter(|m| m.role() != Role::System)
            .map(|m| ApiMessage {
                role: m.role().as_str(),
                content: m.content(),
            })
            .collect();
        (system, rest)
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(&self, messages: &[Message]) -> Result<Completion, DomainError> {
        let (system, conversation) = Self::split_system(messages);
        let request = ApiRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system: (!system.is_empty()).then_some(system.as_str()),
            messages: conversation,
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("AnthropicClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("AnthropicClient: API returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "AnthropicClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("AnthropicClient: failed to parse response: {e}"))
        })?;

        Ok(api_response.into())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
