//! YandexGPT chat API adapter
//!
//! Translates the framework's message history into the YandexGPT chat wire
//! format, performs a single POST, and normalizes the response into a
//! [`ChatResult`]. No retries, no streaming.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    config::{YandexGptConfig, YC_API_KEY_ENV, YC_IAM_TOKEN_ENV},
    error::{Result, YandexGptError},
    messages::{ChatMessage, Role},
};

use super::{ChatGeneration, ChatModel, ChatResult, LlmOutput};

const DEFAULT_BASE_URL: &str = "https://llm.api.cloud.yandex.net";
const CHAT_PATH: &str = "/llm/v1alpha/chat";

/// YandexGPT chat adapter
pub struct YandexGptAdapter {
    client: Client,
    /// Resolved configuration; fields may be mutated between calls
    pub config: YandexGptConfig,
    api_url: String,
}

/// A conversational turn in the provider's wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ParsedMessage {
    role: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest<'a> {
    model: &'a str,
    generation_options: GenerationOptions,
    messages: Vec<ParsedMessage>,
    instruction_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationOptions {
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    result: ChatResponseResult,
}

#[derive(Debug, Deserialize)]
struct ChatResponseResult {
    message: ResponseMessage,
    num_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    text: String,
}

/// Split a chat history into conversational turns and an instruction.
///
/// Human/AI messages map to user/assistant turns in order. System messages
/// never enter the turn list; the last one encountered becomes the
/// instruction. Any other message kind is silently dropped.
fn parse_chat_history(history: &[ChatMessage]) -> (Vec<ParsedMessage>, String) {
    let mut chat_history = Vec::with_capacity(history.len());
    let mut instruction = String::new();

    for message in history {
        match message.role {
            Role::Human => chat_history.push(ParsedMessage {
                role: "user",
                text: message.content.clone(),
            }),
            Role::Ai => chat_history.push(ParsedMessage {
                role: "assistant",
                text: message.content.clone(),
            }),
            Role::System => instruction = message.content.clone(),
            Role::Generic => {}
        }
    }

    (chat_history, instruction)
}

impl YandexGptAdapter {
    /// Create a new YandexGPT adapter.
    ///
    /// Credentials missing from the config are resolved from `YC_API_KEY` /
    /// `YC_IAM_TOKEN`. Fails with [`YandexGptError::MissingCredentials`]
    /// when neither form is available; no request is ever attempted in that
    /// state.
    pub fn new(mut config: YandexGptConfig) -> Result<Self> {
        if config.api_key.is_none() {
            config.api_key = std::env::var(YC_API_KEY_ENV).ok();
        }
        if config.iam_token.is_none() {
            config.iam_token = std::env::var(YC_IAM_TOKEN_ENV).ok();
        }
        if config.api_key.is_none() && config.iam_token.is_none() {
            return Err(YandexGptError::MissingCredentials);
        }

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_url = format!("{base_url}{CHAT_PATH}");

        Ok(Self {
            client: Client::new(),
            config,
            api_url,
        })
    }

    /// Build the Authorization header value, preferring the API key over the
    /// IAM token when both are set.
    fn authorization(&self) -> Result<String> {
        if let Some(api_key) = &self.config.api_key {
            Ok(format!("Api-Key {api_key}"))
        } else if let Some(iam_token) = &self.config.iam_token {
            Ok(format!("Bearer {iam_token}"))
        } else {
            Err(YandexGptError::MissingCredentials)
        }
    }
}

#[async_trait]
impl ChatModel for YandexGptAdapter {
    fn provider(&self) -> &str {
        "yandexgpt"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(
        &self,
        messages: &[ChatMessage],
        cancel: &CancellationToken,
    ) -> Result<ChatResult> {
        let (message_history, instruction) = parse_chat_history(messages);
        let authorization = self.authorization()?;

        let request = ChatRequest {
            model: &self.config.model,
            generation_options: GenerationOptions {
                temperature: self.config.temperature,
                max_tokens: self.config.max_tokens,
            },
            messages: message_history,
            instruction_text: instruction,
        };

        debug!(
            "Calling YandexGPT ({}) with {} messages",
            self.config.model,
            request.messages.len()
        );

        let call = async {
            let response = self
                .client
                .post(&self.api_url)
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, authorization)
                .json(&request)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(YandexGptError::Api {
                    url: self.api_url.clone(),
                    status,
                });
            }

            let body: ChatResponse = response.json().await?;
            Ok(body)
        };

        let body = tokio::select! {
            () = cancel.cancelled() => return Err(YandexGptError::Cancelled),
            body = call => body?,
        };

        let total_tokens = body.result.num_tokens;
        let text = body.result.message.text;

        info!("YandexGPT response: {total_tokens} tokens");

        Ok(ChatResult {
            generations: vec![ChatGeneration {
                text: text.clone(),
                message: ChatMessage::ai(text),
            }],
            llm_output: LlmOutput { total_tokens },
        })
    }
}
