//! AI Core - ERNIE chat completion client
//!
//! Provides abstractions for LLM inference against the Baidu AI Studio
//! API, which serves the ERNIE model family through a token-authenticated
//! chat completion endpoint.

pub mod config;
pub mod ernie;
pub mod error;
pub mod ports;

pub use config::InferenceConfig;
pub use ernie::ErnieClient;
pub use error::InferenceError;
pub use ports::{ChatModel, CompletionRequest, CompletionResponse, TokenUsage};
