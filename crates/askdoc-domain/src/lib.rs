//! askdoc Domain Layer
//!
//! This crate contains the core value types shared by every other layer of
//! askdoc. It carries no infrastructure concerns and defines the fundamental
//! concepts the pipeline operates on.
//!
//! ## Key Concepts
//!
//! - **UploadedDocument**: raw bytes plus a declared filename, immutable once
//!   constructed, alive only for the session that uploaded it
//! - **DocumentFormat**: the closed set of file formats askdoc can ingest,
//!   resolved from the filename extension alone
//! - **ExtractedText**: plain text recovered from a document, read-only once
//!   produced so it can be shared across questions without locking
//!
//! ## Architecture
//!
//! - Pure value types only
//! - Extraction and generation implementations live in other crates
//!   (`askdoc-extract`, `askdoc-llm`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod format;
pub mod text;

// Re-exports for convenience
pub use document::{DocumentId, UploadedDocument};
pub use format::DocumentFormat;
pub use text::ExtractedText;
