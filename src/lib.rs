//! YandexGPT chat-model adapter
//!
//! This library adapts the YandexGPT conversational HTTP endpoint to a
//! generic chat-model calling convention: typed chat messages go in, a single
//! POST is made, and a normalized [`services::ChatResult`] comes back.
//! Credentials are resolved once at construction, from explicit config fields
//! or from the `YC_API_KEY` / `YC_IAM_TOKEN` environment variables.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod messages;
pub mod services;

// Re-exports for convenience
pub use config::YandexGptConfig;
pub use error::{Result, YandexGptError};
pub use messages::{ChatMessage, Role};
pub use services::{yandex::YandexGptAdapter, ChatGeneration, ChatModel, ChatResult, LlmOutput};
