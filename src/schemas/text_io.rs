use serde::{Deserialize, Serialize};

/// Body of a `/generate-text` request, forwarded to the backend untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTextRequest {
    pub prompt: String,
}

impl GenerateTextRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
    pub error: String,
}

impl TextResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: String::new(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            error: error.into(),
        }
    }
}
