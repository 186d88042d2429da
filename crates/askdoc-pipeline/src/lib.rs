//! askdoc Pipeline
//!
//! Answers natural-language questions strictly from the content of one
//! uploaded document, via a hosted generation API.
//!
//! # Overview
//!
//! ```text
//! raw bytes → ExtractorRegistry → ExtractedText → PromptBuilder
//!           → GenerationProvider → normalize → final answer string
//! ```
//!
//! Every query is answered from one full document snapshot in a single
//! stateless call. There is no semantic search, no chunking or embedding,
//! no multi-document corpus, and no conversation memory across turns.
//!
//! # Key Properties
//!
//! - **Constrained answering**: the fixed system instruction telling the
//!   model to answer only from the document is present for every query
//! - **Typed failure taxonomy**: extraction failures halt a query
//!   immediately; generation failures are normalized into category-labeled
//!   fallback messages and never propagate raw to the presentation layer
//! - **No automatic retries**: one call, one attempt, clear failure signal;
//!   retrying is caller policy
//! - **Deadline-bounded**: the remote call is the only suspension point and
//!   is bounded by the configured per-query deadline
//!
//! # Example Usage
//!
//! ```no_run
//! use askdoc_domain::UploadedDocument;
//! use askdoc_pipeline::{Pipeline, PipelineSettings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = PipelineSettings::default();
//! let pipeline = Pipeline::gemini("api-key-from-config", settings);
//!
//! let document = UploadedDocument::new("report.pdf", std::fs::read("report.pdf")?);
//!
//! // Extract once, ask many times
//! let text = pipeline.extract(&document)?;
//! let answer = pipeline.answer(&text, "What is the report's main finding?").await;
//! println!("{}", answer);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod normalize;
mod pipeline;
mod prompt;
mod settings;

pub use error::PipelineError;
pub use normalize::{
    normalize, AUTHENTICATION_FALLBACK, CANCELLED_FALLBACK, EMPTY_RESPONSE_FALLBACK,
    REMOTE_FALLBACK, TRANSPORT_FALLBACK,
};
pub use pipeline::Pipeline;
pub use prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
pub use settings::PipelineSettings;
