//! DOCX extraction backed by `docx-rs`

use crate::error::ExtractError;
use crate::Extract;
use askdoc_domain::DocumentFormat;
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

/// Extractor for Office Open XML word-processing documents
///
/// Paragraphs are walked in document order, each paragraph's runs are
/// concatenated, and paragraphs are joined with newlines. Empty paragraphs
/// contribute empty lines, preserving the document's vertical structure.
/// A malformed package yields [`ExtractError::ExtractionFailed`].
#[derive(Debug, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor
    pub fn new() -> Self {
        Self
    }

    fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
        let mut text = String::new();
        for child in &paragraph.children {
            if let ParagraphChild::Run(run) = child {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        _ => {}
                    }
                }
            }
        }
        text
    }
}

impl Extract for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let docx = read_docx(bytes)
            .map_err(|e| ExtractError::ExtractionFailed(format!("failed to parse DOCX: {}", e)))?;

        let mut lines = Vec::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                lines.push(Self::paragraph_text(paragraph));
            }
        }

        debug!(paragraph_count = lines.len(), "DOCX text extraction complete");

        Ok(lines.join("\n"))
    }

    fn formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Docx]
    }

    fn name(&self) -> &str {
        "docx"
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::docx_with_paragraphs;
    use super::*;

    #[test]
    fn test_extracts_paragraphs_in_order() {
        let bytes = docx_with_paragraphs(&["First paragraph.", "Second paragraph."]);
        let extractor = DocxExtractor::new();
        let text = extractor.extract(&bytes).unwrap();
        assert!(text.contains("First paragraph."));
        assert!(text.contains("Second paragraph."));
        let first = text.find("First paragraph.").unwrap();
        let second = text.find("Second paragraph.").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_paragraphs_become_empty_lines() {
        let bytes = docx_with_paragraphs(&["above", "", "below"]);
        let extractor = DocxExtractor::new();
        let text = extractor.extract(&bytes).unwrap();
        assert!(text.contains("above\n\nbelow"));
    }

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let extractor = DocxExtractor::new();
        let result = extractor.extract(b"this is not a zip archive");
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }
}
