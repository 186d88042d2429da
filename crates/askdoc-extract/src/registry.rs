//! Capability registry mapping document formats to extractors

use crate::error::ExtractError;
use crate::Extract;
use askdoc_domain::{DocumentFormat, ExtractedText, UploadedDocument};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Dispatches an uploaded document to the extractor for its declared format
///
/// The registry is the capability check: a format whose backend was not
/// compiled in simply has no entry, and asking for it reports
/// [`ExtractError::UnsupportedFormat`] at call time. Other formats keep
/// working regardless.
#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: HashMap<DocumentFormat, Arc<dyn Extract>>,
}

impl ExtractorRegistry {
    /// Build a registry with every extractor compiled into this build
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry = registry.register(Arc::new(crate::PlainTextExtractor::new()));
        #[cfg(feature = "pdf")]
        {
            registry = registry.register(Arc::new(crate::PdfExtractor::new()));
        }
        #[cfg(feature = "docx")]
        {
            registry = registry.register(Arc::new(crate::DocxExtractor::new()));
        }
        registry
    }

    /// Build a registry with no extractors at all
    ///
    /// Useful for tests exercising the missing-capability path.
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register an extractor for every format it declares
    pub fn register(mut self, extractor: Arc<dyn Extract>) -> Self {
        for format in extractor.formats() {
            self.extractors.insert(*format, Arc::clone(&extractor));
        }
        self
    }

    /// Whether a format currently has an extractor
    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.extractors.contains_key(&format)
    }

    /// Extract the full plain text of an uploaded document
    ///
    /// Either the whole document's text comes back or an error does; there
    /// are no truncated silent results. Extractor failures propagate
    /// unchanged.
    pub fn extract(&self, document: &UploadedDocument) -> Result<ExtractedText, ExtractError> {
        let format = document.format().ok_or_else(|| {
            ExtractError::UnsupportedFormat(format!(
                "unrecognized extension '{}' on '{}'",
                document.extension().unwrap_or(""),
                document.filename(),
            ))
        })?;

        let extractor = self.extractors.get(&format).ok_or_else(|| {
            ExtractError::UnsupportedFormat(format!(
                "no {} extractor available in this build",
                format,
            ))
        })?;

        let text = extractor.extract(document.bytes())?;

        info!(
            document_id = %document.id(),
            filename = document.filename(),
            extractor = extractor.name(),
            chars = text.len(),
            "document text extracted"
        );

        Ok(ExtractedText::new(text))
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
