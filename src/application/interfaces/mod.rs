mod completion_client;
mod image_generator;

pub use completion_client::*;
pub use image_generator::*;
