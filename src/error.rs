//! Error types for the YandexGPT adapter

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias using [`YandexGptError`]
pub type Result<T> = std::result::Result<T, YandexGptError>;

/// Main error type for the YandexGPT adapter
#[derive(Debug, Error)]
pub enum YandexGptError {
    /// Neither an API key nor an IAM token could be resolved at construction
    #[error(
        "Please set the YC_API_KEY or YC_IAM_TOKEN environment variable \
         or pass api_key/iam_token in the config"
    )]
    MissingCredentials,

    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Non-success HTTP status from the chat endpoint
    #[error("Failed to fetch {url} from YandexGPT: {status}")]
    Api { url: String, status: StatusCode },

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Operation cancelled by the caller
    #[error("Operation cancelled")]
    Cancelled,
}
