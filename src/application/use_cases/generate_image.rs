use std::sync::Arc;

use tracing::info;

use crate::application::ImageGenerator;
use crate::domain::{DomainError, ImageRequest};

pub struct GenerateImageUseCase {
    generator: Arc<dyn ImageGenerator>,
}

impl GenerateImageUseCase {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self { generator }
    }

    /// Returns base64 PNG data. A reply without image data is an upstream error.
    pub async fn execute(&self, request: &ImageRequest) -> Result<String, DomainError> {
        info!(size = request.size(), "Generating image");

        let data = self
            .generator
            .generate(request)
            .await?
            .filter(|data| !data.is_empty())
            .ok_or_else(|| DomainError::upstream("image service returned no image data"))?;

        info!(encoded_len = data.len(), "Image generated");
        Ok(data)
    }
}
