/// Uploaded image payload
use bytes::Bytes;

/// One image file taken from a submission, before it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Filename supplied by the client
    pub file_name: String,

    /// Content type supplied by the client, if any
    pub content_type: Option<String>,

    /// Raw file bytes
    pub data: Bytes,
}

impl ImageFile {
    /// Create an image file
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            data,
        }
    }

    /// Size of the payload in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
