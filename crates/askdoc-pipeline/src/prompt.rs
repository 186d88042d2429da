//! Prompt assembly for document-constrained question answering

/// The fixed system instruction prepended to every request
///
/// This instruction is the sole mechanism constraining the model to the
/// document, so it is never conditional and never omitted - not even when
/// the extracted text is empty.
pub const SYSTEM_INSTRUCTION: &str = "You are answering questions about a single document. \
Answer using only the document content provided below; do not use outside knowledge. \
If the document does not contain the information needed to answer, \
say explicitly that the document does not contain the answer.";

/// Builds the prompt sent to the generation provider
///
/// Pure assembly: no I/O, no truncation. The full document text and the full
/// question always appear in the output verbatim; if the transport has a size
/// limit, that is the answer service's problem to report, not this builder's
/// to paper over.
pub struct PromptBuilder {
    document_text: String,
    question: String,
}

impl PromptBuilder {
    /// Create a builder from extracted document text and a user question
    pub fn new(document_text: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            document_text: document_text.into(),
            question: question.into(),
        }
    }

    /// Assemble the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(SYSTEM_INSTRUCTION);
        prompt.push_str("\n\n");

        prompt.push_str("Document content:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.document_text);
        prompt.push_str("\n---\n\n");

        prompt.push_str("Question: ");
        prompt.push_str(&self.question);
        prompt.push('\n');

        prompt
    }
}
