//! Plain-text and Markdown extraction

use crate::error::ExtractError;
use crate::Extract;
use askdoc_domain::DocumentFormat;

/// Extractor for plain-text and Markdown files
///
/// Decoding policy: strict UTF-8. Invalid byte sequences yield
/// [`ExtractError::Decoding`] rather than being replaced lossily, so the
/// prompt never silently contains replacement characters where the document
/// had content.
#[derive(Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain-text extractor
    pub fn new() -> Self {
        Self
    }
}

impl Extract for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ExtractError::Decoding(format!("invalid UTF-8: {}", e)))?;
        Ok(text.to_string())
    }

    fn formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::PlainText, DocumentFormat::Markdown]
    }

    fn name(&self) -> &str {
        "plain-text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8() {
        let extractor = PlainTextExtractor::new();
        let text = extractor.extract("héllo wörld".as_bytes()).unwrap();
        assert_eq!(text, "héllo wörld");
    }

    #[test]
    fn test_empty_input_yields_empty_text() {
        let extractor = PlainTextExtractor::new();
        assert_eq!(extractor.extract(b"").unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8_is_a_decoding_error() {
        let extractor = PlainTextExtractor::new();
        let result = extractor.extract(&[0x66, 0x6f, 0xff, 0xfe]);
        assert!(matches!(result, Err(ExtractError::Decoding(_))));
    }

    #[test]
    fn test_handles_both_text_formats() {
        let extractor = PlainTextExtractor::new();
        assert!(extractor.formats().contains(&DocumentFormat::PlainText));
        assert!(extractor.formats().contains(&DocumentFormat::Markdown));
    }
}
