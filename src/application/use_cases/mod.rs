mod complete_prompt;
mod generate_image;

pub use complete_prompt::*;
pub use generate_image::*;
