mod anthropic_client;
mod mock_completion;
mod mock_image_generator;
pub(crate) mod openai_client;
mod openai_image_generator;

pub use anthropic_client::AnthropicClient;
pub use mock_completion::*;
pub use mock_image_generator::*;
pub use openai_client::OpenAiClient;
pub use openai_image_generator::*;
