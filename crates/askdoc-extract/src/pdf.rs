//! PDF extraction backed by `lopdf`

use crate::error::ExtractError;
use crate::Extract;
use askdoc_domain::DocumentFormat;
use lopdf::Document;
use tracing::debug;

/// Extractor for PDF documents
///
/// Pages are walked in document order and their text concatenated with a
/// newline between pages. A page that yields no text (an image-only scan,
/// say) contributes an empty segment rather than an error, so a fully
/// image-only PDF extracts to empty text. Encrypted documents are refused
/// with [`ExtractError::ExtractionFailed`] - guessing at protected content
/// is worse than reporting it.
#[derive(Debug, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor
    pub fn new() -> Self {
        Self
    }
}

impl Extract for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| ExtractError::ExtractionFailed(format!("failed to parse PDF: {}", e)))?;

        if doc.is_encrypted() {
            return Err(ExtractError::ExtractionFailed(
                "PDF is encrypted or password-protected".to_string(),
            ));
        }

        let pages = doc.get_pages();
        let page_count = pages.len();

        let mut segments = Vec::with_capacity(page_count);
        for (page_number, _object_id) in pages {
            // A page with no recoverable text contributes an empty segment
            let text = doc.extract_text(&[page_number]).unwrap_or_default();
            segments.push(text.trim_end_matches('\n').to_string());
        }

        debug!(page_count, "PDF text extraction complete");

        Ok(segments.join("\n"))
    }

    fn formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Pdf]
    }

    fn name(&self) -> &str {
        "pdf"
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::pdf_with_text;
    use super::*;

    #[test]
    fn test_extracts_page_text() {
        let bytes = pdf_with_text("The sky is blue.");
        let extractor = PdfExtractor::new();
        let text = extractor.extract(&bytes).unwrap();
        assert!(text.contains("The sky is blue."));
    }

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let extractor = PdfExtractor::new();
        let result = extractor.extract(b"this is not a pdf");
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }

    #[test]
    fn test_truncated_pdf_fails_extraction() {
        let mut bytes = pdf_with_text("some content");
        bytes.truncate(bytes.len() / 2);
        let extractor = PdfExtractor::new();
        let result = extractor.extract(&bytes);
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }
}
