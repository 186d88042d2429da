//! Error types for extraction

use thiserror::Error;

/// Errors that can occur while turning uploaded bytes into plain text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The extension is outside the supported set, or the extractor for it
    /// was not compiled in
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The bytes could not be decoded as text
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// The bytes were recognized but could not be parsed (corrupt file,
    /// unreadable structure, encrypted document)
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),
}
