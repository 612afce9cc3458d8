//! ERNIE inference adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{ChatModel, CompletionRequest, ErnieClient, InferenceConfig};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for ERNIE chat completions via the AI Studio API
pub struct ErnieInferenceAdapter {
    client: ErnieClient,
}

impl std::fmt::Debug for ErnieInferenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErnieInferenceAdapter")
            .field("client", &"ErnieClient")
            .field("model", &self.client.default_model())
            .finish()
    }
}

impl ErnieInferenceAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let client =
            ErnieClient::new(config).map_err(|e| ApplicationError::Inference(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with the default ernie-lite configuration
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(InferenceConfig::ernie_lite())
    }

    /// Convert ai_core error to application error
    fn map_error(e: ai_core::InferenceError) -> ApplicationError {
        match e {
            ai_core::InferenceError::ConnectionFailed(msg) => {
                ApplicationError::Inference(format!("ERNIE connection failed: {msg}"))
            },
            ai_core::InferenceError::Timeout(ms) => {
                ApplicationError::Inference(format!("inference timeout after {ms}ms"))
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for ErnieInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let request = CompletionRequest::new(prompt).with_temperature(temperature);
        let response = self
            .client
            .complete(request)
            .await
            .map_err(Self::map_error)?;

        let latency_ms = start.elapsed().as_millis() as u64;

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            latency_ms = latency_ms,
            "Completion received"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.client.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> &str {
        self.client.default_model()
    }
}
