//! Response normalization - the terminal point before presentation

use askdoc_llm::GenerationError;
use tracing::warn;

/// Fallback shown when the credential was rejected
pub const AUTHENTICATION_FALLBACK: &str = "The answer service could not authenticate with the \
remote model. Check the configured API key.";

/// Fallback shown when the request never reached the service
pub const TRANSPORT_FALLBACK: &str = "The answer service could not reach the remote model. \
Check your network connection and try again.";

/// Fallback shown when the service itself reported an error
pub const REMOTE_FALLBACK: &str = "The remote model reported an error while answering. \
This is a service-side problem; trying again later may help.";

/// Fallback shown when the service answered with no usable text
pub const EMPTY_RESPONSE_FALLBACK: &str = "The remote model returned no answer text for this \
question.";

/// Fallback shown when the per-query deadline elapsed
pub const CANCELLED_FALLBACK: &str = "The answer was cancelled before the remote model finished. \
Try again, or raise the configured deadline.";

/// Convert an answer-service outcome into a presentable string
///
/// Success passes through unchanged - including the model's own "not stated
/// in the document" phrasing. Each failure category maps to a distinct,
/// fixed, human-readable message so a caller can decide corrective action
/// without a stack trace. Nothing escapes past this boundary.
pub fn normalize(result: Result<String, GenerationError>) -> String {
    match result {
        Ok(text) => text,
        Err(error) => {
            warn!(%error, "generation failed, substituting fallback message");
            match error {
                GenerationError::Authentication(_) => AUTHENTICATION_FALLBACK.to_string(),
                GenerationError::Transport(_) => TRANSPORT_FALLBACK.to_string(),
                GenerationError::Remote { .. } => REMOTE_FALLBACK.to_string(),
                GenerationError::EmptyResponse => EMPTY_RESPONSE_FALLBACK.to_string(),
                GenerationError::Cancelled(_) => CANCELLED_FALLBACK.to_string(),
            }
        }
    }
}
