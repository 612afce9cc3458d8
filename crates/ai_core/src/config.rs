//! Configuration for the chat completion client

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the ERNIE chat completion client
#[derive(Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the AI Studio API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// AI Studio access token (sensitive - uses `SecretString`)
    #[serde(skip_serializing, default = "default_access_token")]
    pub access_token: SecretString,

    /// Model to use for completions
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Temperature for sampling (0.0 - 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("model", &self.model)
            .field("timeout_ms", &self.timeout_ms)
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://aistudio.baidu.com/llm/lmapi/v3".to_string()
}

fn default_access_token() -> SecretString {
    SecretString::from(String::new())
}

fn default_model() -> String {
    "ernie-lite".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: default_access_token(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            temperature: default_temperature(),
        }
    }
}

impl InferenceConfig {
    /// Create config for the ernie-lite model
    #[must_use]
    pub fn ernie_lite() -> Self {
        Self {
            model: "ernie-lite".to_string(),
            ..Default::default()
        }
    }

    /// Create config for the ernie-speed model
    #[must_use]
    pub fn ernie_speed() -> Self {
        Self {
            model: "ernie-speed".to_string(),
            ..Default::default()
        }
    }

    /// Whether an access token has been provided
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        !self.access_token.expose_secret().is_empty()
    }
}
