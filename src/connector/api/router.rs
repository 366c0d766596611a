use anyhow::{bail, Result};

use crate::cli::Commands;

use super::container::Container;
use super::controller::{ImageController, PromptController};

/// Dispatches one-shot CLI commands to their controller.
pub struct Router<'a> {
    prompt_controller: PromptController<'a>,
    image_controller: ImageController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            prompt_controller: PromptController::new(container),
            image_controller: ImageController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Chat { message } => self.prompt_controller.chat(message).await,
            Commands::Document { kind, content } => {
                self.prompt_controller.document(kind, content).await
            }
            Commands::Code {
                kind,
                language,
                code,
            } => self.prompt_controller.code(kind, language, code).await,
            Commands::Text { kind, content } => self.prompt_controller.text(kind, content).await,
            Commands::Creative { kind, topic } => {
                self.prompt_controller.creative(kind, topic).await
            }
            Commands::Utility { kind, input } => self.prompt_controller.utility(kind, input).await,
            Commands::Image {
                prompt,
                output,
                size,
            } => self.image_controller.generate(prompt, output, size).await,
            Commands::Serve { .. } | Commands::Shell => {
                bail!("serve and shell are long-running and not routed here")
            }
        }
    }
}
