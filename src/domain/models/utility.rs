use super::{Category, PromptPair, PromptTemplate};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilityTask {
    Email,
    Meeting,
    Study,
    Health,
}

impl UtilityTask {
    pub const ALL: [UtilityTask; 4] = [
        UtilityTask::Email,
        UtilityTask::Meeting,
        UtilityTask::Study,
        UtilityTask::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UtilityTask::Email => "email",
            UtilityTask::Meeting => "meeting",
            UtilityTask::Study => "study",
            UtilityTask::Health => "health",
        }
    }
}

impl std::fmt::Display for UtilityTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UtilityTask {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UtilityTask::ALL
            .into_iter()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| DomainError::invalid_type(Category::Utility.invalid_type_message()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityRequest {
    task: UtilityTask,
    input: String,
}

impl UtilityRequest {
    pub fn new(task: UtilityTask, input: impl Into<String>) -> Self {
        Self {
            task,
            input: input.into(),
        }
    }

    pub fn from_fields(kind: Option<&str>, input: Option<&str>) -> Result<Self, DomainError> {
        let [kind, input] = Category::Utility.require([kind, input])?;
        Ok(Self::new(kind.parse()?, input))
    }

    pub fn task(&self) -> UtilityTask {
        self.task
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl PromptTemplate for UtilityRequest {
    fn category(&self) -> Category {
        Category::Utility
    }

    fn prompt(&self) -> PromptPair {
        let input = &self.input;
        match self.task {
            UtilityTask::Email => PromptPair::new(
                "你是一个专业的邮件撰写助手，能够根据需求撰写各种类型的邮件。请撰写结构清晰、语气恰当、内容完整的邮件。",
                format!("请根据以下需求撰写一封邮件：\n\n{input}"),
            ),
            UtilityTask::Meeting => PromptPair::new(
                "你是一个会议纪要专家，能够整理和总结会议内容。请根据会议信息生成结构化的会议纪要，包含主要议题、讨论要点、决策和行动项。",
                format!("请根据以下会议信息整理会议纪要：\n\n{input}"),
            ),
            UtilityTask::Study => PromptPair::new(
                "你是一个学习助手，能够提供学习建议和方法指导。请根据学习需求提供个性化的学习计划、方法和资源建议。",
                format!("请为以下学习需求提供建议：\n\n{input}"),
            ),
            UtilityTask::Health => PromptPair::new(
                "你是一个健康顾问，能够提供健康生活建议。请注意你的建议应该是一般性的健康指导，不能替代专业医疗建议。",
                format!("请为以下健康需求提供一般性建议：\n\n{input}"),
            ),
        }
    }
}
