use super::{Category, PromptPair, PromptTemplate};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTask {
    Summary,
    Polish,
    Sentiment,
    Keywords,
}

impl TextTask {
    pub const ALL: [TextTask; 4] = [
        TextTask::Summary,
        TextTask::Polish,
        TextTask::Sentiment,
        TextTask::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextTask::Summary => "summary",
            TextTask::Polish => "polish",
            TextTask::Sentiment => "sentiment",
            TextTask::Keywords => "keywords",
        }
    }
}

impl std::fmt::Display for TextTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TextTask {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextTask::ALL
            .into_iter()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| DomainError::invalid_type(Category::Text.invalid_type_message()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRequest {
    task: TextTask,
    content: String,
}

impl TextRequest {
    pub fn new(task: TextTask, content: impl Into<String>) -> Self {
        Self {
            task,
            content: content.into(),
        }
    }

    pub fn from_fields(kind: Option<&str>, content: Option<&str>) -> Result<Self, DomainError> {
        let [kind, content] = Category::Text.require([kind, content])?;
        Ok(Self::new(kind.parse()?, content))
    }

    pub fn task(&self) -> TextTask {
        self.task
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl PromptTemplate for TextRequest {
    fn category(&self) -> Category {
        Category::Text
    }

    fn prompt(&self) -> PromptPair {
        let content = &self.content;
        match self.task {
            TextTask::Summary => PromptPair::new(
                "你是一个专业的文本摘要助手，能够准确提炼文本的核心内容和要点。请用简洁明了的语言生成摘要，保持原文的主要信息和逻辑结构。",
                format!("请为以下文本生成摘要：\n\n{content}"),
            ),
            TextTask::Polish => PromptPair::new(
                "你是一个专业的文本润色助手，能够改善文本的表达方式、语法结构和逻辑性。请保持原文的核心意思，提升文本的专业性和可读性。",
                format!("请润色以下文本，提升其表达质量和专业性：\n\n{content}"),
            ),
            TextTask::Sentiment => PromptPair::new(
                "你是一个情感分析专家，能够准确分析文本的情感倾向。请分析文本的情感是积极、消极还是中性，并给出具体的分析依据和置信度。",
                format!("请分析以下文本的情感倾向：\n\n{content}"),
            ),
            TextTask::Keywords => PromptPair::new(
                "你是一个关键词提取专家，能够从文本中提取最重要的关键词和核心概念。请提取5-10个最具代表性的关键词，并简要说明每个关键词的重要性。",
                format!("请从以下文本中提取关键词：\n\n{content}"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_text_task_has_distinct_system_prompt() {
        let prompts: Vec<PromptPair> = ["summary", "polish", "sentiment", "keywords"]
            .iter()
            .map(|kind| TextRequest::from_fields(Some(*kind), Some("今天天气很好")).unwrap().prompt())
            .collect();

        for (i, a) in prompts.iter().enumerate() {
            assert!(a.user().ends_with("今天天气很好"));
            for b in &prompts[i + 1..] {
                assert_ne!(a.system(), b.system());
            }
        }
    }

    #[test]
    fn test_text_type_is_case_sensitive() {
        let err = TextRequest::from_fields(Some("Summary"), Some("x")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid text processing type");
    }
}
