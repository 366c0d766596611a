use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::Engine as _;
use tracing::info;

use crate::domain::ImageRequest;

use super::super::Container;

pub struct ImageController<'a> {
    container: &'a Container,
}

impl<'a> ImageController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Generate an image and write the decoded PNG to `output`.
    pub async fn generate(
        &self,
        prompt: String,
        output: PathBuf,
        size: Option<String>,
    ) -> Result<String> {
        let mut request = ImageRequest::from_fields(Some(prompt.as_str()))?;
        if let Some(size) = size {
            request = request.with_size(size);
        }

        let use_case = self.container.image_use_case();
        let encoded = use_case.execute(&request).await?;
        let bytes = write_png(&encoded, &output).await?;

        info!(path = %output.display(), bytes, "Image written");
        Ok(format!("Saved {} ({} bytes)", output.display(), bytes))
    }
}

pub(crate) async fn write_png(encoded: &str, path: &Path) -> Result<usize> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .context("image data is not valid base64")?;
    tokio::fs::write(path, &bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(bytes.len())
}
