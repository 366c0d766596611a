use async_trait::async_trait;

use crate::domain::{DomainError, ImageRequest};

/// Produces a picture from a text prompt.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns base64-encoded PNG data, or `None` when the service answered
    /// without any image.
    async fn generate(&self, request: &ImageRequest) -> Result<Option<String>, DomainError>;
}
