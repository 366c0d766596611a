use async_trait::async_trait;

use crate::domain::{Completion, DomainError, Message};

/// An interface for sending a message list to an LLM and receiving its choices.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Use cases stay decoupled from any particular provider or HTTP
/// client library.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `messages` in order and return every choice the service produced.
    ///
    /// An empty choice list is a valid answer, not an error.
    async fn complete(&self, messages: &[Message]) -> Result<Completion, DomainError>;

    fn model_name(&self) -> &str;
}
