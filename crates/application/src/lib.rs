//! Application layer - Pipeline use cases and orchestration
//!
//! Contains the three pipeline stages (intent extraction, forecast
//! selection, response synthesis), the agent orchestrator, and the port
//! definitions the infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
