use super::{Category, PromptPair, PromptTemplate};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreativeTask {
    Poem,
    Story,
    Marketing,
    Brainstorm,
}

impl CreativeTask {
    pub const ALL: [CreativeTask; 4] = [
        CreativeTask::Poem,
        CreativeTask::Story,
        CreativeTask::Marketing,
        CreativeTask::Brainstorm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreativeTask::Poem => "poem",
            CreativeTask::Story => "story",
            CreativeTask::Marketing => "marketing",
            CreativeTask::Brainstorm => "brainstorm",
        }
    }
}

impl std::fmt::Display for CreativeTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CreativeTask {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CreativeTask::ALL
            .into_iter()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| DomainError::invalid_type(Category::Creative.invalid_type_message()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreativeRequest {
    task: CreativeTask,
    topic: String,
}

impl CreativeRequest {
    pub fn new(task: CreativeTask, topic: impl Into<String>) -> Self {
        Self {
            task,
            topic: topic.into(),
        }
    }

    pub fn from_fields(kind: Option<&str>, topic: Option<&str>) -> Result<Self, DomainError> {
        let [kind, topic] = Category::Creative.require([kind, topic])?;
        Ok(Self::new(kind.parse()?, topic))
    }

    pub fn task(&self) -> CreativeTask {
        self.task
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl PromptTemplate for CreativeRequest {
    fn category(&self) -> Category {
        Category::Creative
    }

    fn prompt(&self) -> PromptPair {
        let topic = &self.topic;
        match self.task {
            CreativeTask::Poem => PromptPair::new(
                "你是一个才华横溢的诗人，能够创作各种风格的诗歌。请根据主题创作富有诗意和美感的诗歌，注意韵律和意境的营造。",
                format!("请以\"{topic}\"为主题创作一首诗："),
            ),
            CreativeTask::Story => PromptPair::new(
                "你是一个优秀的小说家，能够创作引人入胜的故事。请根据主题创作一个完整的故事，包含生动的情节、鲜明的人物和深刻的主题。",
                format!("请以\"{topic}\"为主题创作一个故事："),
            ),
            CreativeTask::Marketing => PromptPair::new(
                "你是一个营销文案专家，能够撰写吸引人的营销文案。请根据产品或服务特点，创作具有说服力和吸引力的营销文案。",
                format!("请为\"{topic}\"创作营销文案："),
            ),
            CreativeTask::Brainstorm => PromptPair::new(
                "你是一个创意思维专家，能够提供丰富的创意和想法。请围绕主题提供多样化的创意想法，包括不同的角度和可能性。",
                format!("请围绕\"{topic}\"进行头脑风暴，提供创意想法："),
            ),
        }
    }
}
