//! Line-oriented terminal front end with the same tabs as the web UI.

mod state;

pub use state::{failure_notice, Action, ShellState, Submission, CHAT_APOLOGY};

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::connector::api::controller::write_png;
use crate::connector::api::Container;
use crate::domain::{
    Category, ChatRequest, CodeRequest, CreativeRequest, DocumentRequest, DomainError,
    ImageRequest, PromptTemplate, TextRequest, UtilityRequest,
};

/// Read commands and submissions from stdin until `/quit` or EOF.
pub async fn run(container: &Container) -> Result<()> {
    let mut state = ShellState::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!(
        "promptdesk shell (model {}). Type /help for commands.",
        container.model_name()
    );

    loop {
        print!("{}", state.prompt());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match state.handle_line(&line) {
            Action::None => {}
            Action::Quit => break,
            Action::Print(text) => println!("{}", text),
            Action::Submit(submission) => {
                let outcome = execute(container, &submission).await.map_err(|e| {
                    warn!("{} request failed: {}", submission.category.label(), e);
                    e.to_string()
                });
                let shown = state.finish(&submission, outcome);
                println!("{}\n", shown);

                if submission.category == Category::Image {
                    save_latest_image(&state).await;
                }
            }
        }
    }

    Ok(())
}

/// Run one submission through the matching use case.
pub async fn execute(container: &Container, submission: &Submission) -> Result<String, DomainError> {
    let kind = submission.kind.as_deref();
    let input = Some(submission.input.as_str());

    let request: Box<dyn PromptTemplate> = match submission.category {
        Category::Chat => Box::new(ChatRequest::from_fields(input)?),
        Category::Document => Box::new(DocumentRequest::from_fields(kind, input)?),
        Category::Code => Box::new(CodeRequest::from_fields(
            kind,
            submission.language.as_deref(),
            input,
        )?),
        Category::Text => Box::new(TextRequest::from_fields(kind, input)?),
        Category::Creative => Box::new(CreativeRequest::from_fields(kind, input)?),
        Category::Utility => Box::new(UtilityRequest::from_fields(kind, input)?),
        Category::Image => {
            let request = ImageRequest::from_fields(input)?;
            return container.image_use_case().execute(&request).await;
        }
    };

    container.prompt_use_case().execute(request.as_ref()).await
}

async fn save_latest_image(state: &ShellState) {
    let Some(image) = state.images().first() else {
        return;
    };
    let path = PathBuf::from(format!("image-{}.png", image.id()));
    match write_png(image.image_data(), &path).await {
        Ok(bytes) => println!("Saved {} ({} bytes)\n", path.display(), bytes),
        Err(e) => warn!("Could not save image: {:#}", e),
    }
}
