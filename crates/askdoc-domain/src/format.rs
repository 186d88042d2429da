//! The closed set of document formats askdoc can ingest

use std::fmt;

/// A document format askdoc knows how to extract text from
///
/// The set is closed: exactly these four variants, selected by filename
/// extension. There is no content sniffing; a `.pdf` that is not actually a
/// PDF fails later, at extraction time, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Plain UTF-8 text (`.txt`)
    PlainText,
    /// Markdown, treated as plain UTF-8 text (`.md`)
    Markdown,
    /// Portable Document Format (`.pdf`)
    Pdf,
    /// Office Open XML word-processing document (`.docx`)
    Docx,
}

impl DocumentFormat {
    /// All formats, in a fixed order
    pub const ALL: [DocumentFormat; 4] = [
        DocumentFormat::PlainText,
        DocumentFormat::Markdown,
        DocumentFormat::Pdf,
        DocumentFormat::Docx,
    ];

    /// Resolve a filename extension (without the dot) to a format
    ///
    /// Matching is case-insensitive. Returns `None` for anything outside the
    /// closed set.
    ///
    /// # Examples
    ///
    /// ```
    /// use askdoc_domain::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
    /// assert_eq!(DocumentFormat::from_extension("csv"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Some(DocumentFormat::PlainText),
            "md" => Some(DocumentFormat::Markdown),
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    /// The canonical extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "txt",
            DocumentFormat::Markdown => "md",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::PlainText => "plain text",
            DocumentFormat::Markdown => "Markdown",
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
        };
        write!(f, "{}", name)
    }
}
