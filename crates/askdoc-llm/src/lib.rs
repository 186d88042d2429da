//! askdoc Generation Provider Layer
//!
//! Pluggable providers for the remote generation call.
//!
//! # Architecture
//!
//! This crate defines the [`GenerationProvider`] trait - the pipeline's only
//! suspension point - and its implementations. A provider makes exactly one
//! attempt per call: no retries, no backoff. Retrying is a caller-level
//! policy; an interactive user decides whether to ask again.
//!
//! # Providers
//!
//! - [`MockProvider`]: deterministic canned responses for testing
//! - [`GeminiProvider`]: Google Generative Language API over HTTPS
//!
//! # Examples
//!
//! ```
//! use askdoc_llm::{GenerationProvider, MockProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new("Hello from the model!");
//! let result = provider.generate("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from the model!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during a generation call
///
/// Each variant is a distinct, separately reportable failure category; the
/// response normalizer maps them to distinct user-facing messages.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The credential was missing, invalid, or rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The request never completed (connectivity, DNS, connection reset)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with an error status
    #[error("Remote service error (HTTP {status}): {message}")]
    Remote {
        /// HTTP status code returned by the service
        status: u16,
        /// Error body or status description
        message: String,
    },

    /// The service answered successfully but returned no usable text
    #[error("Remote service returned an empty response")]
    EmptyResponse,

    /// The caller's deadline elapsed or the call was cancelled mid-flight
    #[error("Generation cancelled: {0}")]
    Cancelled(String),
}

/// Trait for the remote generation capability
///
/// Implementations send a fully-built prompt and return the raw answer text.
/// One call is one attempt; callers own deadlines and retry policy.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate a text completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Failure categories a [`MockProvider`] can be told to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Simulate a rejected credential
    Authentication,
    /// Simulate a connectivity failure
    Transport,
    /// Simulate a remote-side error status
    Remote,
    /// Simulate a success with no usable text
    EmptyResponse,
    /// Simulate a cancelled call
    Cancelled,
}

impl MockFailure {
    fn into_error(self) -> GenerationError {
        match self {
            MockFailure::Authentication => {
                GenerationError::Authentication("mock credential rejected".to_string())
            }
            MockFailure::Transport => {
                GenerationError::Transport("mock connection refused".to_string())
            }
            MockFailure::Remote => GenerationError::Remote {
                status: 500,
                message: "mock server error".to_string(),
            },
            MockFailure::EmptyResponse => GenerationError::EmptyResponse,
            MockFailure::Cancelled => {
                GenerationError::Cancelled("mock deadline elapsed".to_string())
            }
        }
    }
}

#[derive(Debug, Clone)]
enum CannedReply {
    Text(String),
    Failure(MockFailure),
}

/// Mock generation provider for deterministic testing
///
/// Returns pre-configured responses without any network access. Identical
/// prompts always receive identical replies, so pipeline runs against it are
/// idempotent.
///
/// # Examples
///
/// ```
/// use askdoc_llm::{GenerationProvider, MockProvider};
///
/// # async fn example() {
/// let mut provider = MockProvider::new("default reply");
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.generate("prompt1").await.unwrap(), "response1");
/// assert_eq!(provider.generate("anything else").await.unwrap(), "default reply");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: CannedReply,
    replies: Arc<Mutex<HashMap<String, CannedReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider that answers every prompt with a fixed text
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_reply: CannedReply::Text(response.into()),
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that fails every call with the given category
    pub fn failing(failure: MockFailure) -> Self {
        Self {
            default_reply: CannedReply::Failure(failure),
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(prompt.into(), CannedReply::Text(response.into()));
    }

    /// Configure a failure category for a specific prompt
    pub fn add_failure(&mut self, prompt: impl Into<String>, failure: MockFailure) {
        self.replies
            .lock()
            .unwrap()
            .insert(prompt.into(), CannedReply::Failure(failure));
    }

    /// Number of times `generate` has been called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        *self.call_count.lock().unwrap() += 1;

        let reply = {
            let replies = self.replies.lock().unwrap();
            replies.get(prompt).cloned()
        };

        match reply.unwrap_or_else(|| self.default_reply.clone()) {
            CannedReply::Text(text) => Ok(text),
            CannedReply::Failure(failure) => Err(failure.into_error()),
        }
    }
}
