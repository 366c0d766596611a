pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CompletePromptUseCase, CompletionClient, GenerateImageUseCase, ImageGenerator,
};

pub use connector::{
    AnthropicClient, Container, ContainerConfig, MockCompletion, MockImageGenerator,
    OpenAiClient, OpenAiImageGenerator, Provider,
};

pub use domain::{
    Category, ChatEntry, Completion, DomainError, GeneratedImage, ImageRequest, Message,
    PromptPair, PromptTemplate, ResultRecord, Role,
};
