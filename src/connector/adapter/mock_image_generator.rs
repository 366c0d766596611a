use async_trait::async_trait;

use crate::application::ImageGenerator;
use crate::domain::{DomainError, ImageRequest};

/// A valid 1x1 transparent PNG, base64-encoded.
pub const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// Offline [`ImageGenerator`] returning a fixed placeholder picture.
pub struct MockImageGenerator {
    data: Option<String>,
}

impl MockImageGenerator {
    pub fn new() -> Self {
        Self {
            data: Some(PLACEHOLDER_PNG_BASE64.to_string()),
        }
    }

    /// Answers without any image data.
    pub fn empty() -> Self {
        Self { data: None }
    }
}

impl Default for MockImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate(&self, _request: &ImageRequest) -> Result<Option<String>, DomainError> {
        Ok(self.data.clone())
    }
}
