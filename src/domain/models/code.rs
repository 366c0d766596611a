use super::{Category, PromptPair, PromptTemplate};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeTask {
    Generate,
    Explain,
    Optimize,
}

impl CodeTask {
    pub const ALL: [CodeTask; 3] = [
        CodeTask::Generate,
        CodeTask::Explain,
        CodeTask::Optimize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CodeTask::Generate => "generate",
            CodeTask::Explain => "explain",
            CodeTask::Optimize => "optimize",
        }
    }
}

impl std::fmt::Display for CodeTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CodeTask {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CodeTask::ALL
            .into_iter()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| DomainError::invalid_type(Category::Code.invalid_type_message()))
    }
}

/// A code assistance request. For `generate` the `code` field holds the
/// requirement description rather than source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRequest {
    task: CodeTask,
    language: String,
    code: String,
}

impl CodeRequest {
    pub fn new(task: CodeTask, language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            task,
            language: language.into(),
            code: code.into(),
        }
    }

    pub fn from_fields(
        kind: Option<&str>,
        language: Option<&str>,
        code: Option<&str>,
    ) -> Result<Self, DomainError> {
        let [kind, language, code] = Category::Code.require([kind, language, code])?;
        Ok(Self::new(kind.parse()?, language, code))
    }

    pub fn task(&self) -> CodeTask {
        self.task
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    fn fenced_code(&self) -> String {
        format!("```{}\n{}\n```", self.language, self.code)
    }
}

impl PromptTemplate for CodeRequest {
    fn category(&self) -> Category {
        Category::Code
    }

    fn prompt(&self) -> PromptPair {
        let language = &self.language;
        match self.task {
            CodeTask::Generate => PromptPair::new(
                format!("你是一个专业的{language}开发工程师，能够根据需求生成高质量、可维护的代码。请生成完整的代码实现，包含必要的注释和错误处理。"),
                format!("请使用{language}语言实现以下功能：\n\n{}", self.code),
            ),
            CodeTask::Explain => PromptPair::new(
                "你是一个专业的代码解释助手，能够用清晰易懂的语言解释代码的功能和原理。请详细解释代码的逻辑、每个部分的作用，以及可能的优化建议。",
                format!("请解释以下{language}代码的功能和原理：\n\n{}", self.fenced_code()),
            ),
            CodeTask::Optimize => PromptPair::new(
                "你是一个代码优化专家，能够识别代码中的性能问题和改进空间。请提供优化后的代码，并解释优化的思路和带来的改进。",
                format!("请优化以下{language}代码，提高其性能和可读性：\n\n{}", self.fenced_code()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_puts_language_in_both_prompts() {
        let request = CodeRequest::new(CodeTask::Generate, "rust", "读取文件并统计行数");
        let prompt = request.prompt();
        assert!(prompt.system().contains("专业的rust开发工程师"));
        assert_eq!(prompt.user(), "请使用rust语言实现以下功能：\n\n读取文件并统计行数");
    }

    #[test]
    fn test_explain_fences_code_with_language_tag() {
        let request = CodeRequest::new(CodeTask::Explain, "python", "print(1)");
        assert!(request
            .prompt()
            .user()
            .ends_with("\n\n```python\nprint(1)\n```"));
    }

    #[test]
    fn test_code_requires_language() {
        let err = CodeRequest::from_fields(Some("optimize"), Some(""), Some("x = 1")).unwrap_err();
        assert_eq!(err.to_string(), "Type, language, and code are required");
    }

    #[test]
    fn test_code_rejects_unknown_type() {
        let err = CodeRequest::from_fields(Some("refactor"), Some("go"), Some("x")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid code processing type");
    }
}
