use serde::{Deserialize, Serialize};

use super::{CodeTask, CreativeTask, DocumentTask, TextTask, UtilityTask};
use crate::domain::DomainError;

pub const GENERIC_FALLBACK: &str = "处理失败，请稍后再试。";
pub const CHAT_FALLBACK: &str = "抱歉，我无法生成回复。";
pub const CREATIVE_FALLBACK: &str = "创作失败，请稍后再试。";

/// The feature areas exposed by the application, one per UI tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chat,
    Image,
    Document,
    Code,
    Text,
    Creative,
    Utility,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Chat,
        Category::Image,
        Category::Document,
        Category::Code,
        Category::Text,
        Category::Creative,
        Category::Utility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chat => "chat",
            Category::Image => "image",
            Category::Document => "document",
            Category::Code => "code",
            Category::Text => "text",
            Category::Creative => "creative",
            Category::Utility => "utility",
        }
    }

    /// HTTP path serving this category.
    pub fn route(&self) -> &'static str {
        match self {
            Category::Chat => "/api/chat",
            Category::Image => "/api/generate-image",
            Category::Document => "/api/document-processing",
            Category::Code => "/api/code-assistant",
            Category::Text => "/api/text-processing",
            Category::Creative => "/api/creative-writing",
            Category::Utility => "/api/utility-tools",
        }
    }

    /// Human-readable label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Chat => "Chat",
            Category::Image => "Image generation",
            Category::Document => "Document processing",
            Category::Code => "Code assistant",
            Category::Text => "Text processing",
            Category::Creative => "Creative writing",
            Category::Utility => "Utility tools",
        }
    }

    /// Text returned when the completion carries no usable choice.
    pub fn fallback(&self) -> &'static str {
        match self {
            Category::Chat => CHAT_FALLBACK,
            Category::Creative => CREATIVE_FALLBACK,
            _ => GENERIC_FALLBACK,
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            Category::Chat => "Message is required",
            Category::Image => "Prompt is required",
            Category::Document | Category::Text => "Type and content are required",
            Category::Code => "Type, language, and code are required",
            Category::Creative => "Type and topic are required",
            Category::Utility => "Type and input are required",
        }
    }

    pub fn invalid_type_message(&self) -> &'static str {
        match self {
            Category::Document => "Invalid document processing type",
            Category::Code => "Invalid code processing type",
            Category::Text => "Invalid text processing type",
            Category::Creative => "Invalid creative writing type",
            Category::Utility => "Invalid utility tool type",
            Category::Chat | Category::Image => "Invalid request type",
        }
    }

    /// JSON key wrapping a successful text answer.
    pub fn response_key(&self) -> &'static str {
        match self {
            Category::Chat => "response",
            Category::Image => "imageData",
            _ => "result",
        }
    }

    /// Accepted `type` values, empty for categories without a selector.
    pub fn task_names(&self) -> Vec<&'static str> {
        fn names<T>(all: &[T], name: fn(&T) -> &'static str) -> Vec<&'static str> {
            all.iter().map(name).collect()
        }

        match self {
            Category::Document => names(&DocumentTask::ALL, DocumentTask::as_str),
            Category::Code => names(&CodeTask::ALL, CodeTask::as_str),
            Category::Text => names(&TextTask::ALL, TextTask::as_str),
            Category::Creative => names(&CreativeTask::ALL, CreativeTask::as_str),
            Category::Utility => names(&UtilityTask::ALL, UtilityTask::as_str),
            Category::Chat | Category::Image => Vec::new(),
        }
    }

    /// Checks that every field is present and non-empty.
    pub fn require<'a, const N: usize>(
        &self,
        fields: [Option<&'a str>; N],
    ) -> Result<[&'a str; N], DomainError> {
        let mut values = [""; N];
        for (slot, field) in values.iter_mut().zip(fields) {
            match field {
                Some(value) if !value.is_empty() => *slot = value,
                _ => return Err(DomainError::missing_field(self.required_message())),
            }
        }
        Ok(values)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| DomainError::invalid_input(format!("Unknown category: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_absent_and_empty_fields() {
        let err = Category::Code
            .require([Some("explain"), None, Some("fn main() {}")])
            .unwrap_err();
        assert_eq!(err.to_string(), "Type, language, and code are required");

        let err = Category::Document.require([Some("summary"), Some("")]).unwrap_err();
        assert_eq!(err.to_string(), "Type and content are required");
    }

    #[test]
    fn test_require_keeps_whitespace_values() {
        let [kind, content] = Category::Text.require([Some("polish"), Some("  ")]).unwrap();
        assert_eq!(kind, "polish");
        assert_eq!(content, "  ");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Code".parse::<Category>().unwrap(), Category::Code);
        assert!("video".parse::<Category>().is_err());
    }

    #[test]
    fn test_task_names_parse_back_to_their_task() {
        for name in Category::Creative.task_names() {
            assert_eq!(name.parse::<CreativeTask>().unwrap().as_str(), name);
        }
        for name in Category::Code.task_names() {
            assert_eq!(name.parse::<CodeTask>().unwrap().as_str(), name);
        }
        assert_eq!(
            Category::Utility.task_names(),
            vec!["email", "meeting", "study", "health"]
        );
        assert!(Category::Chat.task_names().is_empty());
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(Category::Chat.fallback(), CHAT_FALLBACK);
        assert_eq!(Category::Creative.fallback(), CREATIVE_FALLBACK);
        assert_eq!(Category::Utility.fallback(), GENERIC_FALLBACK);
    }
}
