//! AI Studio client implementation

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{ChatModel, CompletionRequest, CompletionResponse, TokenUsage};

/// ERNIE chat completion client backed by the AI Studio API
pub struct ErnieClient {
    client: Client,
    config: InferenceConfig,
}

impl ErnieClient {
    /// Create a new ERNIE client
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized ERNIE chat client"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Authorization header value (AI Studio uses the `token` scheme)
    fn auth_header(&self) -> String {
        format!("token {}", self.config.access_token.expose_secret())
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a CompletionRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.config.model)
    }
}

/// AI Studio chat completion request
#[derive(Debug, Serialize)]
struct ErnieChatRequest {
    model: String,
    messages: Vec<ErnieMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ErnieMessage {
    role: String,
    content: String,
}

/// AI Studio chat completion response
#[derive(Debug, Deserialize)]
struct ErnieChatResponse {
    result: String,
    #[serde(default)]
    usage: Option<ErnieUsage>,
}

#[derive(Debug, Deserialize)]
struct ErnieUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

#[async_trait]
impl ChatModel for ErnieClient {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, InferenceError> {
        let model = self.resolve_model(&request).to_string();
        let temperature = request.temperature.or(Some(self.config.temperature));

        let ernie_request = ErnieChatRequest {
            model: model.clone(),
            messages: vec![ErnieMessage {
                role: "user".to_string(),
                content: request.prompt,
            }],
            temperature,
        };

        debug!("Sending chat completion to AI Studio");

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header(AUTHORIZATION, self.auth_header())
            .json(&ernie_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Chat completion failed");
            return Err(match status.as_u16() {
                401 | 403 => InferenceError::AuthFailed(body),
                429 => InferenceError::RateLimited,
                _ => InferenceError::ServerError(format!("Status {status}: {body}")),
            });
        }

        let ernie_response: ErnieChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let usage = ernie_response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        debug!(tokens = ?usage, "Chat completion finished");

        Ok(CompletionResponse {
            content: ernie_response.result,
            model,
            usage,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, InferenceError> {
        let response = self
            .client
            .get(self.api_url("models"))
            .header(AUTHORIZATION, self.auth_header())
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() => Ok(false),
            Err(e) if e.is_connect() => Ok(false),
            Err(e) => Err(InferenceError::RequestFailed(e.to_string())),
        }
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }
}
