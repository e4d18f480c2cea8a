use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Serialize, Debug)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            prompt,
            stream: false,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct GenerateResponse {
    pub response: Option<String>,
}
