mod category;
mod chat;
mod code;
mod completion;
mod creative;
mod document;
mod history;
mod image;
mod message;
mod prompt;
mod text;
mod utility;

pub use category::*;
pub use chat::*;
pub use code::*;
pub use completion::*;
pub use creative::*;
pub use document::*;
pub use history::*;
pub use image::*;
pub use message::*;
pub use prompt::*;
pub use text::*;
pub use utility::*;
