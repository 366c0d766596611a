use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::CompletionClient;
use crate::domain::{DomainError, PromptTemplate};

/// Runs one prompt template through the completion client.
///
/// Exactly one upstream call per execution; no retries.
pub struct CompletePromptUseCase {
    client: Arc<dyn CompletionClient>,
}

impl CompletePromptUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Returns the first choice's text, or the category fallback when the
    /// service answered without usable text.
    pub async fn execute(&self, request: &dyn PromptTemplate) -> Result<String, DomainError> {
        let category = request.category();
        let prompt = request.prompt();

        debug!(
            category = %category,
            model = self.client.model_name(),
            user_len = prompt.user().len(),
            "Sending prompt"
        );

        let start_time = Instant::now();
        let completion = self.client.complete(&prompt.to_messages()).await?;

        info!(
            category = %category,
            choices = completion.choices().len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Completion received"
        );

        match completion.into_first_text() {
            Some(text) => Ok(text),
            None => {
                warn!(category = %category, "Completion carried no text, using fallback");
                Ok(category.fallback().to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::adapter::MockCompletion;
    use crate::domain::{
        Category, ChatRequest, Completion, DocumentRequest, Role, UtilityRequest, UtilityTask,
    };

    #[tokio::test]
    async fn test_returns_first_choice_text() {
        let client = Arc::new(MockCompletion::with_reply("整理好的纪要"));
        let use_case = CompletePromptUseCase::new(client.clone());

        let request = UtilityRequest::new(UtilityTask::Meeting, "周一例会");
        let result = use_case.execute(&request).await.unwrap();

        assert_eq!(result, "整理好的纪要");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_sends_system_then_user_message() {
        let client = Arc::new(MockCompletion::new());
        let use_case = CompletePromptUseCase::new(client.clone());

        let request = DocumentRequest::from_fields(Some("translation"), Some("hello")).unwrap();
        use_case.execute(&request).await.unwrap();

        let calls = client.calls();
        let messages = &calls[0];
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(messages[1].role(), Role::User);
        assert_eq!(messages[1].content(), "请将以下内容翻译成中文：\n\nhello");
    }

    #[tokio::test]
    async fn test_falls_back_when_no_choices() {
        let use_case = CompletePromptUseCase::new(Arc::new(MockCompletion::empty()));

        let chat = ChatRequest::from_fields(Some("hi")).unwrap();
        assert_eq!(
            use_case.execute(&chat).await.unwrap(),
            Category::Chat.fallback()
        );
    }

    #[tokio::test]
    async fn test_falls_back_when_first_choice_is_blank() {
        let client = MockCompletion::with_completion(Completion::from_text(""));
        let use_case = CompletePromptUseCase::new(Arc::new(client));

        let request = UtilityRequest::new(UtilityTask::Email, "请假");
        assert_eq!(
            use_case.execute(&request).await.unwrap(),
            Category::Utility.fallback()
        );
    }

    #[tokio::test]
    async fn test_propagates_client_failure() {
        let use_case = CompletePromptUseCase::new(Arc::new(MockCompletion::failing("boom")));

        let chat = ChatRequest::from_fields(Some("hi")).unwrap();
        let err = use_case.execute(&chat).await.unwrap_err();
        assert!(err.is_upstream());
    }
}
