//! Image loading - stands in for the browser file picker on desktop
//!
//! Reads a file from disk and wraps it as an [`ImageFile`], inferring the
//! MIME type from the extension.

use std::path::Path;

use charsheet_domain::{DomainError, ImageFile};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image path has no file name: {0}")]
    MissingFileName(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Read an image file for the character sheet.
pub async fn load_image(path: impl AsRef<Path>) -> Result<ImageFile, ImageLoadError> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ImageLoadError::MissingFileName(path.display().to_string()))?;

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(file_name = %file_name, len = bytes.len(), "Loaded character image");

    Ok(ImageFile::with_inferred_mime(file_name, bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_bytes_and_infers_mime() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("retrato.JPG");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();

        let image = load_image(&path).await.unwrap();

        assert_eq!(image.file_name(), "retrato.JPG");
        assert_eq!(image.mime_type(), "image/jpeg");
        assert_eq!(image.bytes(), &[0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");

        let result = load_image(dir.path().join("nope.png")).await;

        assert!(matches!(result, Err(ImageLoadError::Io(_))));
    }

    #[tokio::test]
    async fn path_without_file_name_is_rejected() {
        let result = load_image("/").await;
        assert!(matches!(result, Err(ImageLoadError::MissingFileName(_))));
    }
}
