//! Pipeline configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the pipeline
///
/// Passed explicitly into the pipeline constructor rather than read from
/// ambient process state, so tests can run against stub providers. The API
/// key is deliberately not part of this struct - credentials travel as an
/// explicit constructor argument and are never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Model identifier sent to the generation service
    pub model: String,

    /// Generation service endpoint
    pub endpoint: String,

    /// Per-query deadline for the generation call (seconds)
    ///
    /// The only blocking step is the remote call; when this elapses, the
    /// query fails with a cancellation, distinct from a transport failure.
    pub deadline_secs: u64,
}

impl PipelineSettings {
    /// Get the per-query deadline as a Duration
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.endpoint.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.deadline_secs == 0 {
            return Err("deadline_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            model: askdoc_llm::gemini::DEFAULT_MODEL.to_string(),
            endpoint: askdoc_llm::gemini::DEFAULT_ENDPOINT.to_string(),
            deadline_secs: 30,
        }
    }
}
