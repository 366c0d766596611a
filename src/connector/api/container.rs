use std::sync::Arc;

use clap::ValueEnum;
use tracing::debug;

use crate::application::{
    CompletePromptUseCase, CompletionClient, GenerateImageUseCase, ImageGenerator,
};
use crate::connector::adapter::{
    AnthropicClient, MockCompletion, MockImageGenerator, OpenAiClient, OpenAiImageGenerator,
};

/// Which completion API the text categories talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Provider {
    /// OpenAI-compatible `/v1/chat/completions`.
    #[default]
    Openai,
    /// Anthropic Messages API `/v1/messages`.
    Anthropic,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Openai => "openai",
            Provider::Anthropic => "anthropic",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContainerConfig {
    pub provider: Provider,
    /// Use offline mock clients instead of calling any service.
    pub mock: bool,
}

pub struct Container {
    completion_client: Arc<dyn CompletionClient>,
    image_generator: Arc<dyn ImageGenerator>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let (completion_client, image_generator): (
            Arc<dyn CompletionClient>,
            Arc<dyn ImageGenerator>,
        ) = if config.mock {
            debug!("Using mock completion and image clients");
            (
                Arc::new(MockCompletion::new()),
                Arc::new(MockImageGenerator::new()),
            )
        } else {
            let completion: Arc<dyn CompletionClient> = match config.provider {
                Provider::Openai => Arc::new(OpenAiClient::from_env()),
                Provider::Anthropic => Arc::new(AnthropicClient::from_env()),
            };
            debug!(
                "Using {} completion provider (model {})",
                config.provider.as_str(),
                completion.model_name()
            );
            // Images always go through the OpenAI-compatible endpoint.
            (completion, Arc::new(OpenAiImageGenerator::from_env()))
        };

        Self {
            completion_client,
            image_generator,
            config,
        }
    }

    /// Build a container around explicit clients.
    pub fn with_clients(
        completion_client: Arc<dyn CompletionClient>,
        image_generator: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            completion_client,
            image_generator,
            config: ContainerConfig::default(),
        }
    }

    pub fn prompt_use_case(&self) -> CompletePromptUseCase {
        CompletePromptUseCase::new(self.completion_client.clone())
    }

    pub fn image_use_case(&self) -> GenerateImageUseCase {
        GenerateImageUseCase::new(self.image_generator.clone())
    }

    pub fn model_name(&self) -> &str {
        self.completion_client.model_name()
    }

    pub fn provider(&self) -> Provider {
        self.config.provider
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock
    }
}
