//! Gemini Provider Implementation
//!
//! Integration with the Google Generative Language API
//! (`models/{model}:generateContent`).
//!
//! # Features
//!
//! - Async HTTP communication with the Gemini REST endpoint
//! - Configurable endpoint and model
//! - Single-attempt calls: a failure is reported once, immediately; retrying
//!   is the caller's decision
//!
//! # Examples
//!
//! ```no_run
//! use askdoc_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new("api-key-from-config", "gemini-2.0-flash");
//! ```

use crate::{GenerationError, GenerationProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// HTTP-level timeout for a single request (60 seconds)
///
/// A backstop only. The pipeline's per-query deadline is expected to fire
/// first and is what distinguishes `Cancelled` from `Transport`.
pub const HTTP_TIMEOUT_SECS: u64 = 60;

/// Generation provider backed by the Google Generative Language API
///
/// The credential and model identifier are passed in explicitly - the
/// provider never reads ambient process state, so tests can construct it
/// against a stub endpoint.
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response from the generateContent API
///
/// Only the fields askdoc consumes; everything else in the body is ignored.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: credential from the caller's configuration
    /// - `model`: model identifier (e.g. "gemini-2.0-flash")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a provider for the default model
    pub fn default_model(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_MODEL)
    }

    /// Override the API endpoint (stub servers, regional endpoints)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for a fully-built prompt
    ///
    /// Exactly one request is made. Failure categories:
    ///
    /// - credential rejected (401/403) → [`GenerationError::Authentication`]
    /// - request never completed → [`GenerationError::Transport`]
    /// - any other error status → [`GenerationError::Remote`]
    /// - success with no usable text → [`GenerationError::EmptyResponse`]
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "credential rejected".to_string());
            return Err(GenerationError::Authentication(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GenerationError::Remote {
                status: status.as_u16(),
                message: body,
            });
        }

        // A success body we cannot read a text field out of is an empty
        // response, whatever shape it had
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(format!("failed to read response: {}", e)))?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|_| GenerationError::EmptyResponse)?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text)
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.generate(prompt).await
    }
}
