use super::{Category, PromptPair, PromptTemplate};
use crate::domain::DomainError;

const SYSTEM_PROMPT: &str = "你是一个智能助手，能够回答用户的问题，提供有用的信息和建议。请用中文回复，保持友好和专业的语气。";

/// A single chat turn. Earlier turns are not replayed to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    message: String,
}

impl ChatRequest {
    pub fn from_fields(message: Option<&str>) -> Result<Self, DomainError> {
        let [message] = Category::Chat.require([message])?;
        Ok(Self {
            message: message.to_string(),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PromptTemplate for ChatRequest {
    fn category(&self) -> Category {
        Category::Chat
    }

    fn prompt(&self) -> PromptPair {
        PromptPair::new(SYSTEM_PROMPT, self.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_forwards_message_verbatim() {
        let request = ChatRequest::from_fields(Some("你好")).unwrap();
        let prompt = request.prompt();
        assert_eq!(prompt.system(), SYSTEM_PROMPT);
        assert_eq!(prompt.user(), "你好");
    }

    #[test]
    fn test_chat_requires_message() {
        let err = ChatRequest::from_fields(None).unwrap_err();
        assert_eq!(err.to_string(), "Message is required");
    }
}
