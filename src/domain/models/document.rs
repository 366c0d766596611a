use super::{Category, PromptPair, PromptTemplate};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentTask {
    Summary,
    Translation,
    Qa,
}

impl DocumentTask {
    pub const ALL: [DocumentTask; 3] = [
        DocumentTask::Summary,
        DocumentTask::Translation,
        DocumentTask::Qa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentTask::Summary => "summary",
            DocumentTask::Translation => "translation",
            DocumentTask::Qa => "qa",
        }
    }
}

impl std::fmt::Display for DocumentTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentTask {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentTask::ALL
            .into_iter()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| DomainError::invalid_type(Category::Document.invalid_type_message()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    task: DocumentTask,
    content: String,
}

impl DocumentRequest {
    pub fn new(task: DocumentTask, content: impl Into<String>) -> Self {
        Self {
            task,
            content: content.into(),
        }
    }

    pub fn from_fields(kind: Option<&str>, content: Option<&str>) -> Result<Self, DomainError> {
        let [kind, content] = Category::Document.require([kind, content])?;
        Ok(Self::new(kind.parse()?, content))
    }

    pub fn task(&self) -> DocumentTask {
        self.task
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl PromptTemplate for DocumentRequest {
    fn category(&self) -> Category {
        Category::Document
    }

    fn prompt(&self) -> PromptPair {
        let content = &self.content;
        match self.task {
            DocumentTask::Summary => PromptPair::new(
                "你是一个专业的文档摘要助手，能够准确提炼文档的核心内容和要点。请用简洁明了的语言生成摘要，保持原文的主要信息和逻辑结构。",
                format!("请为以下文档生成摘要：\n\n{content}"),
            ),
            DocumentTask::Translation => PromptPair::new(
                "你是一个专业的翻译助手，能够准确翻译各种语言的内容。请保持原文的语义和语气，确保翻译自然流畅。",
                format!("请将以下内容翻译成中文：\n\n{content}"),
            ),
            DocumentTask::Qa => PromptPair::new(
                "你是一个智能问答助手，能够根据文档内容回答相关问题。请基于提供的信息给出准确、详细的答案。",
                format!("基于以下文档内容，请回答用户可能的问题。文档内容：\n\n{content}\n\n请提供常见问题及答案："),
            ),
        }
    }
}
