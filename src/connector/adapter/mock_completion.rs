use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::{Completion, DomainError, Message, Role};

enum Reply {
    Echo,
    Fixed(Completion),
    Fail(String),
}

/// Offline [`CompletionClient`] used by `--mock` and by tests.
///
/// The default reply echoes the last user message, so output is deterministic
/// for a given prompt. Every call's message list is recorded.
pub struct MockCompletion {
    reply: Reply,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::from_reply(Reply::Echo)
    }

    pub fn with_reply(text: impl Into<String>) -> Self {
        Self::from_reply(Reply::Fixed(Completion::from_text(text)))
    }

    pub fn with_completion(completion: Completion) -> Self {
        Self::from_reply(Reply::Fixed(completion))
    }

    /// Answers with an empty choice list.
    pub fn empty() -> Self {
        Self::with_completion(Completion::default())
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_reply(Reply::Fail(message.into()))
    }

    fn from_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, messages: &[Message]) -> Result<Completion, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }

        match &self.reply {
            Reply::Echo => {
                let last_user = messages
                    .iter()
                    .rev()
                    .find(|m| m.role() == Role::User)
                    .map(Message::content)
                    .unwrap_or_default();
                debug!("MockCompletion echoing {} bytes", last_user.len());
                Ok(Completion::from_text(format!("[mock] {last_user}")))
            }
            Reply::Fixed(completion) => Ok(completion.clone()),
            Reply::Fail(message) => Err(DomainError::upstream(message.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "mock-completion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_echo_is_deterministic() {
        let client = MockCompletion::new();
        let messages = vec![Message::system("sys"), Message::user("ping")];

        let first = client.complete(&messages).await.unwrap();
        let second = client.complete(&messages).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.first_text(), Some("[mock] ping"));
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let client = MockCompletion::failing("offline");
        let err = client.complete(&[Message::user("x")]).await.unwrap_err();
        assert_eq!(err.to_string(), "Upstream error: offline");
    }
}
