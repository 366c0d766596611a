use std::io::Read;

use anyhow::Result;

use crate::domain::{
    ChatRequest, CodeRequest, CreativeRequest, DocumentRequest, PromptTemplate, TextRequest,
    UtilityRequest,
};

use super::super::Container;

/// Runs the text categories from the command line and returns the answer.
pub struct PromptController<'a> {
    container: &'a Container,
}

impl<'a> PromptController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn chat(&self, message: String) -> Result<String> {
        let request = ChatRequest::from_fields(Some(message.as_str()))?;
        self.run(&request).await
    }

    pub async fn document(&self, kind: String, content: String) -> Result<String> {
        let content = read_input(content)?;
        let request = DocumentRequest::from_fields(Some(kind.as_str()), Some(content.as_str()))?;
        self.run(&request).await
    }

    pub async fn code(&self, kind: String, language: String, code: String) -> Result<String> {
        let code = read_input(code)?;
        let request = CodeRequest::from_fields(
            Some(kind.as_str()),
            Some(language.as_str()),
            Some(code.as_str()),
        )?;
        self.run(&request).await
    }

    pub async fn text(&self, kind: String, content: String) -> Result<String> {
        let content = read_input(content)?;
        let request = TextRequest::from_fields(Some(kind.as_str()), Some(content.as_str()))?;
        self.run(&request).await
    }

    pub async fn creative(&self, kind: String, topic: String) -> Result<String> {
        let request = CreativeRequest::from_fields(Some(kind.as_str()), Some(topic.as_str()))?;
        self.run(&request).await
    }

    pub async fn utility(&self, kind: String, input: String) -> Result<String> {
        let input = read_input(input)?;
        let request = UtilityRequest::from_fields(Some(kind.as_str()), Some(input.as_str()))?;
        self.run(&request).await
    }

    async fn run(&self, request: &dyn PromptTemplate) -> Result<String> {
        let use_case = self.container.prompt_use_case();
        Ok(use_case.execute(request).await?)
    }
}

/// `-` means "read the whole of stdin".
fn read_input(arg: String) -> Result<String> {
    if arg != "-" {
        return Ok(arg);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
