//! Pipeline orchestration: extract, prompt, generate, normalize

use crate::error::PipelineError;
use crate::normalize::normalize;
use crate::prompt::PromptBuilder;
use crate::settings::PipelineSettings;
use askdoc_domain::{ExtractedText, UploadedDocument};
use askdoc_extract::ExtractorRegistry;
use askdoc_llm::{GeminiProvider, GenerationError, GenerationProvider};
use tokio::time::timeout;
use tracing::{debug, info};

/// The document question-answering pipeline
///
/// Each query is a single stateless, linear pass: extraction, prompt
/// assembly, one generation call under the configured deadline,
/// normalization. Concurrent queries share no mutable state - a `Pipeline`
/// holds only the provider, the registry, and settings, all read-only after
/// construction - so independent invocations need no locking.
pub struct Pipeline<P: GenerationProvider> {
    provider: P,
    registry: ExtractorRegistry,
    settings: PipelineSettings,
}

impl<P: GenerationProvider> Pipeline<P> {
    /// Create a pipeline from a provider and settings
    ///
    /// The registry starts with every extractor compiled into this build.
    pub fn new(provider: P, settings: PipelineSettings) -> Self {
        Self {
            provider,
            registry: ExtractorRegistry::new(),
            settings,
        }
    }

    /// Replace the extractor registry
    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The pipeline's settings
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Extract the plain text of a document
    ///
    /// Exposed separately so callers can show a preview and cache the result:
    /// the returned [`ExtractedText`] is read-only and may be reused across
    /// any number of questions on the same document without re-extracting.
    pub fn extract(&self, document: &UploadedDocument) -> Result<ExtractedText, PipelineError> {
        Ok(self.registry.extract(document)?)
    }

    /// Answer a question from already-extracted text
    ///
    /// Builds the prompt (system instruction always included, even for empty
    /// text), makes one generation call bounded by the configured deadline,
    /// and normalizes the outcome. Never fails at the signature: every
    /// generation failure comes back as a category-specific fallback string.
    pub async fn answer(&self, text: &ExtractedText, question: &str) -> String {
        let prompt = PromptBuilder::new(text.as_str(), question).build();
        debug!(prompt_chars = prompt.len(), "prompt assembled");

        let outcome = match timeout(self.settings.deadline(), self.provider.generate(&prompt)).await
        {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Cancelled(format!(
                "deadline of {}s elapsed",
                self.settings.deadline_secs
            ))),
        };

        normalize(outcome)
    }

    /// Run the full pipeline for one document and one question
    ///
    /// Extraction failures halt the query immediately and surface as errors
    /// (no fallback extraction is attempted, and the provider is never
    /// called). Generation failures arrive normalized inside the returned
    /// string.
    pub async fn ask(
        &self,
        document: &UploadedDocument,
        question: &str,
    ) -> Result<String, PipelineError> {
        info!(
            document_id = %document.id(),
            filename = document.filename(),
            "answering question from document"
        );

        let text = self.extract(document)?;
        Ok(self.answer(&text, question).await)
    }
}

impl Pipeline<GeminiProvider> {
    /// Convenience constructor wiring a Gemini provider from settings
    ///
    /// The API key is explicit; nothing here reads environment variables.
    pub fn gemini(api_key: impl Into<String>, settings: PipelineSettings) -> Self {
        let provider = GeminiProvider::new(api_key, settings.model.clone())
            .with_endpoint(settings.endpoint.clone());
        Self::new(provider, settings)
    }
}
