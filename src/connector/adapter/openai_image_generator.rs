use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::ImageGenerator;
use crate::connector::adapter::openai_client::DEFAULT_BASE_URL;
use crate::domain::{DomainError, ImageRequest};

const GENERATIONS_PATH: &str = "/v1/images/generations";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    response_format: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<ApiImage>,
}

#[derive(Deserialize)]
struct ApiImage {
    b64_json: Option<String>,
}

impl ApiResponse {
    fn into_first_image(self) -> Option<String> {
        self.data.into_iter().next().and_then(|image| image.b64_json)
    }
}

/// [`ImageGenerator`] backed by an OpenAI-compatible `/v1/images/generations`
/// endpoint. Shares `OPENAI_BASE_URL` and `OPENAI_API_KEY` with
/// [`super::OpenAiClient`]; the model comes from `OPENAI_IMAGE_MODEL`.
pub struct OpenAiImageGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl OpenAiImageGenerator {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), GENERATIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(180))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    pub fn from_env() -> Self {
        let base = std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_IMAGE_MODEL")
            .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());
        let key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        Self::new(key, model, base)
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate(&self, request: &ImageRequest) -> Result<Option<String>, DomainError> {
        let body = ApiRequest {
            model: &self.model,
            prompt: request.prompt(),
            n: 1,
            size: request.size(),
            response_format: "b64_json",
        };

        let mut builder = self.client.post(&self.url).json(&body);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder.send().await.map_err(|e| {
            DomainError::upstream(format!("OpenAiImageGenerator: request failed: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!("OpenAiImageGenerator: API returned {status}: {text}");
            return Err(DomainError::upstream(format!(
                "OpenAiImageGenerator: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("OpenAiImageGenerator: failed to parse response: {e}"))
        })?;

        Ok(api_response.into_first_image())
    }
}
