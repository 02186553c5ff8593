//! Adapter configuration

use serde::{Deserialize, Serialize};

/// Environment variable holding the static API key
pub const YC_API_KEY_ENV: &str = "YC_API_KEY";

/// Environment variable holding the IAM bearer token
pub const YC_IAM_TOKEN_ENV: &str = "YC_IAM_TOKEN";

/// Configuration for the YandexGPT adapter
///
/// Exactly one credential form is required: a static API key or a short-lived
/// IAM token. Fields left as `None` are resolved from the environment when
/// the adapter is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YandexGptConfig {
    /// Static API key (preferred over the IAM token when both are set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// IAM bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_token: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Custom API endpoint base (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    "general".to_string()
}

const fn default_temperature() -> f32 {
    0.6
}

const fn default_max_tokens() -> u32 {
    1700
}

impl Default for YandexGptConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            iam_token: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            base_url: None,
        }
    }
}
