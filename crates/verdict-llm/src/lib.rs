//! OpenAI chat-completion client used by every workforce worker.

mod client;

pub use client::{ChatClient, LlmMetrics, LlmResponse};
