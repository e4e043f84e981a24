//! Character image - an uploaded binary blob with its file name and MIME type

use std::fmt;

use crate::error::DomainError;

/// MIME type used when the file extension is not recognised
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// An image picked by the user.
///
/// Only the shape is checked (non-empty file name and MIME type). The file
/// picker's `image/*` filter is a hint, so no content sniffing or size limit
/// is applied here.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl ImageFile {
    /// Create an image from its parts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the file name or MIME type is
    /// empty after trimming.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        let mime_type = mime_type.into();
        if file_name.trim().is_empty() {
            return Err(DomainError::validation("Image file name cannot be empty"));
        }
        if mime_type.trim().is_empty() {
            return Err(DomainError::validation("Image MIME type cannot be empty"));
        }
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Create an image, inferring the MIME type from the file extension.
    pub fn with_inferred_mime(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        let mime_type = mime_type_for(&file_name);
        Self::new(file_name, mime_type, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the image, returning `(file_name, mime_type, bytes)`.
    pub fn into_parts(self) -> (String, String, Vec<u8>) {
        (self.file_name, self.mime_type, self.bytes)
    }
}

// Bytes are summarised so logging a draft does not dump the whole image.
impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Determine the MIME type from a file name's extension
pub fn mime_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => FALLBACK_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_file_name() {
        let result = ImageFile::new("  ", "image/png", vec![1, 2, 3]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_empty_mime_type() {
        assert!(ImageFile::new("hero.png", "", vec![]).is_err());
    }

    #[test]
    fn infers_mime_type_from_extension() {
        assert_eq!(mime_type_for("hero.PNG"), "image/png");
        assert_eq!(mime_type_for("hero.jpeg"), "image/jpeg");
        assert_eq!(mime_type_for("hero.jpg"), "image/jpeg");
        assert_eq!(mime_type_for("portrait.webp"), "image/webp");
        assert_eq!(mime_type_for("notes.txt"), FALLBACK_MIME_TYPE);
        assert_eq!(mime_type_for("no_extension"), FALLBACK_MIME_TYPE);
    }

    #[test]
    fn debug_does_not_print_bytes() {
        let image = ImageFile::with_inferred_mime("hero.gif", vec![0xAB; 64]).unwrap();
        let debug = format!("{:?}", image);
        assert!(debug.contains("hero.gif"));
        assert!(debug.contains("image/gif"));
        assert!(debug.contains("len: 64"));
        assert!(!debug.contains("171"));
    }
}
