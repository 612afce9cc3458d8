//! Domain layer for Tianqi
//!
//! Contains the core vocabulary of the weather assistant: query intents,
//! forecast records, summary formatting, and the city name directory.
//! This layer has no I/O dependencies.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
