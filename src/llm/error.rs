use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Content not found in response: {0}")]
    ContentNotFound(String),

    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
