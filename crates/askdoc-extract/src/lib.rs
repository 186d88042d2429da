//! askdoc Extractors
//!
//! Converts raw uploaded bytes into plain text, one extractor per document
//! format.
//!
//! # Overview
//!
//! Extraction is the first stage of the askdoc pipeline:
//!
//! ```text
//! UploadedDocument → ExtractorRegistry → Extract impl → ExtractedText
//! ```
//!
//! The registry dispatches on the declared filename extension only. Each
//! extractor is stateless and reads nothing but the byte buffer it is given;
//! there are no partial results - a call yields the full text of the document
//! or an [`ExtractError`].
//!
//! # Optional backends
//!
//! PDF and DOCX support sit behind the `pdf` and `docx` cargo features (both
//! on by default). A registry built without one of them reports
//! [`ExtractError::UnsupportedFormat`] for that format at call time while the
//! remaining formats keep working - graceful degradation rather than a
//! startup failure.
//!
//! # Example
//!
//! ```
//! use askdoc_domain::UploadedDocument;
//! use askdoc_extract::ExtractorRegistry;
//!
//! let registry = ExtractorRegistry::new();
//! let doc = UploadedDocument::new("notes.txt", b"The sky is blue.".to_vec());
//! let text = registry.extract(&doc).unwrap();
//! assert_eq!(text.as_str(), "The sky is blue.");
//! ```

#![warn(missing_docs)]

mod error;
mod plain;
mod registry;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "docx")]
mod docx;

pub use error::ExtractError;
pub use plain::PlainTextExtractor;
pub use registry::ExtractorRegistry;

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

use askdoc_domain::DocumentFormat;

/// Core extraction trait - one implementation per backing parser
///
/// Implementations are stateless, side-effect free, and operate on the byte
/// buffer alone.
pub trait Extract: Send + Sync {
    /// Extract the full plain text from raw document bytes
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;

    /// The formats this extractor handles
    fn formats(&self) -> &[DocumentFormat];

    /// Human-readable name for this extractor
    fn name(&self) -> &str;
}
