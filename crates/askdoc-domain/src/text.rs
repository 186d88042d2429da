//! Extracted text - the plain-text view of a document

use std::fmt;

/// Plain text recovered from an uploaded document by exactly one extractor
///
/// May legitimately be empty (an image-only PDF has no recoverable text).
/// The value is read-only once produced: callers may cache it for the
/// lifetime of the document and answer any number of questions from the same
/// snapshot without re-extracting, and concurrent questions can share it
/// without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Wrap already-extracted plain text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no text was recovered at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Consume the wrapper, yielding the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for ExtractedText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_valid() {
        let text = ExtractedText::new("");
        assert!(text.is_empty());
        assert_eq!(text.len(), 0);
    }

    #[test]
    fn test_content_round_trip() {
        let text = ExtractedText::new("The sky is blue.");
        assert_eq!(text.as_str(), "The sky is blue.");
        assert_eq!(text.into_inner(), "The sky is blue.");
    }
}
