use serde::{Deserialize, Serialize};

/// Largest accepted image, exclusive: 1 MiB.
pub const MAX_IMAGE_BYTES: u64 = 1024 * 1024;

/// An image file picked in the browser, read into memory.
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Whether the image is at or above [`MAX_IMAGE_BYTES`].
    pub fn exceeds_limit(&self) -> bool {
        self.size() >= MAX_IMAGE_BYTES
    }
}

// Keeps image bytes out of logs.
impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.size())
            .finish()
    }
}

/// A successfully hosted image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedImage {
    pub url: String,
}
