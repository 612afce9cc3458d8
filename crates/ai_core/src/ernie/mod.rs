//! ERNIE chat completion backend
//!
//! Talks to the Baidu AI Studio API, which authenticates with a
//! personal access token and serves the ERNIE model family.

mod client;

pub use client::ErnieClient;
