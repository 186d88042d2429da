//! Error types for the pipeline

use askdoc_extract::ExtractError;
use askdoc_llm::GenerationError;
use thiserror::Error;

/// Errors surfaced by pipeline operations
///
/// The variant names the failing stage, so the caller can tell an ingestion
/// problem (fix the file) from an answering problem (fix the service or
/// retry) without inspecting messages.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The document could not be turned into text; the query halts here and
    /// no generation call is made
    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// The generation call failed
    ///
    /// Reached only through APIs that expose raw generation outcomes; the
    /// normalizing entry points convert this category to fallback text
    /// instead.
    #[error("Answer generation failed: {0}")]
    Generation(#[from] GenerationError),
}
