pub mod image_controller;
pub mod prompt_controller;

pub use image_controller::ImageController;
pub use prompt_controller::PromptController;

pub(crate) use image_controller::write_png;
