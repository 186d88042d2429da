//! Uploaded documents - the raw input to the pipeline

use crate::format::DocumentFormat;
use std::fmt;

/// Unique identifier for an uploaded document, based on UUIDv7
///
/// UUIDv7 provides chronological sortability and requires no coordination,
/// so concurrent uploads never contend on id generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u128);

impl DocumentId {
    /// Generate a new UUIDv7-based DocumentId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a DocumentId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A document as uploaded by the user: raw bytes plus a declared filename
///
/// Immutable after construction. Nothing is persisted - the value lives for
/// the session that uploaded it and is dropped when a new document replaces
/// it. The format is declared by the filename extension; the bytes are never
/// sniffed.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    id: DocumentId,
    filename: String,
    bytes: Vec<u8>,
}

impl UploadedDocument {
    /// Create a document from a declared filename and its raw bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use askdoc_domain::{DocumentFormat, UploadedDocument};
    ///
    /// let doc = UploadedDocument::new("notes.md", b"# Notes".to_vec());
    /// assert_eq!(doc.format(), Some(DocumentFormat::Markdown));
    /// ```
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: DocumentId::new(),
            filename: filename.into(),
            bytes,
        }
    }

    /// The document's identifier
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// The declared filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The raw uploaded bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The filename extension, without the dot
    ///
    /// `None` when the filename has no extension at all.
    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.filename.rsplit_once('.')?;
        if stem.is_empty() {
            // Dotfiles like ".gitignore" have no extension
            return None;
        }
        Some(ext)
    }

    /// The declared format, resolved from the extension
    pub fn format(&self) -> Option<DocumentFormat> {
        self.extension().and_then(DocumentFormat::from_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_ids_are_unique() {
        let a = DocumentId::new();
        let b = DocumentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_document_ids_sort_chronologically() {
        let a = DocumentId::new();
        let b = DocumentId::new();
        assert!(a < b);
    }

    #[test]
    fn test_extension_parsing() {
        let doc = UploadedDocument::new("report.final.pdf", vec![]);
        assert_eq!(doc.extension(), Some("pdf"));
        assert_eq!(doc.format(), Some(DocumentFormat::Pdf));
    }

    #[test]
    fn test_no_extension() {
        let doc = UploadedDocument::new("README", vec![]);
        assert_eq!(doc.extension(), None);
        assert_eq!(doc.format(), None);
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let doc = UploadedDocument::new(".gitignore", vec![]);
        assert_eq!(doc.extension(), None);
    }

    #[test]
    fn test_unrecognized_extension_has_no_format() {
        let doc = UploadedDocument::new("data.csv", vec![]);
        assert_eq!(doc.extension(), Some("csv"));
        assert_eq!(doc.format(), None);
    }

    #[test]
    fn test_bytes_are_preserved() {
        let doc = UploadedDocument::new("a.txt", vec![1, 2, 3]);
        assert_eq!(doc.bytes(), &[1, 2, 3]);
        assert_eq!(doc.filename(), "a.txt");
    }
}
