//! Service layer for chat-model providers
//!
//! This module defines the generic calling convention an orchestration layer
//! programs against, and hosts the provider adapters that implement it.

pub mod yandex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{error::Result, messages::ChatMessage};

/// A single generated completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatGeneration {
    /// Raw generated text
    pub text: String,
    /// The same text wrapped as an AI-authored message
    pub message: ChatMessage,
}

/// Provider-reported metadata about a completed call
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LlmOutput {
    /// Aggregate token count reported by the provider
    pub total_tokens: u32,
}

/// Result of a chat-model call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResult {
    pub generations: Vec<ChatGeneration>,
    pub llm_output: LlmOutput,
}

/// Core trait for chat-model adapters
///
/// Each provider translates the framework's [`ChatMessage`] history into its
/// own wire format, performs one request, and normalizes the response back
/// into a [`ChatResult`].
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Get the provider name (e.g., "yandexgpt")
    fn provider(&self) -> &str;

    /// Get the model name
    fn model(&self) -> &str;

    /// Send a conversation to the model and return the normalized result.
    ///
    /// The cancellation token is cooperative: cancelling it aborts the
    /// in-flight request and yields [`crate::YandexGptError::Cancelled`].
    async fn generate(
        &self,
        messages: &[ChatMessage],
        cancel: &CancellationToken,
    ) -> Result<ChatResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time verification that `ChatModel` is object-safe.
    #[test]
    fn test_chat_model_is_object_safe() {
        fn _assert_object_safe(_: &dyn ChatModel) {}
    }

    #[test]
    fn test_llm_output_default() {
        assert_eq!(LlmOutput::default().total_tokens, 0);
    }
}
