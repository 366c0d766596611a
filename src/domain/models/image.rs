use super::Category;
use crate::domain::DomainError;

pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    prompt: String,
    size: String,
}

impl ImageRequest {
    pub fn from_fields(prompt: Option<&str>) -> Result<Self, DomainError> {
        let [prompt] = Category::Image.require([prompt])?;
        Ok(Self {
            prompt: prompt.to_string(),
            size: DEFAULT_IMAGE_SIZE.to_string(),
        })
    }

    /// Override the requested `WIDTHxHEIGHT` size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn size(&self) -> &str {
        &self.size
    }
}
