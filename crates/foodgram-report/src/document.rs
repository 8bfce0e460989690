//! Rendered report value handed to the delivery layer

use bytes::Bytes;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Fully rendered, immutable report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportDocument {
    bytes: Bytes,
    content_type: &'static str,
    file_name: String,
}

impl ReportDocument {
    pub fn pdf(bytes: impl Into<Bytes>, file_name: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: PDF_CONTENT_TYPE,
            file_name: file_name.into(),
        }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Value of the `Content-Disposition` header for a download
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}
