use async_trait::async_trait;
use reqwest::Client;

use crate::llm::{LLMError, LLM};

use super::{GenerateRequest, GenerateResponse, OllamaConfig, DEFAULT_OLLAMA_MODEL};

/// Client for Ollama's non-streaming `/api/generate` endpoint.
///
/// # Example
/// ```rust,ignore
/// let ollama = Ollama::builder()
///     .with_api_config(OllamaConfig::default().with_api_base("http://127.0.0.1:11434"))
///     .with_model("mistral")
///     .build()?;
///
/// let response = ollama.invoke("Hi").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Ollama {
    config: OllamaConfig,
    model: String,
    client: Client,
}

impl Ollama {
    pub fn builder() -> OllamaBuilder {
        OllamaBuilder::default()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn map_request_error(&self, error: reqwest::Error) -> LLMError {
        if error.is_timeout() {
            LLMError::Timeout(self.config.timeout())
        } else {
            LLMError::RequestError(error)
        }
    }
}

#[async_trait]
impl LLM for Ollama {
    async fn invoke(&self, prompt: &str) -> Result<String, LLMError> {
        let url = self.config.generate_url()?;
        let request = GenerateRequest::new(&self.model, prompt);

        log::debug!("Sending prompt to {url} (model {})", self.model);
        log::trace!("\nPrompt:\n{prompt}");

        let body = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| self.map_request_error(e))?
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let response: GenerateResponse = serde_json::from_str(&body)?;
        let text = response
            .response
            .ok_or_else(|| LLMError::ContentNotFound("response".into()))?;

        Ok(text.trim().to_string())
    }
}

#[derive(Debug, Default)]
pub struct OllamaBuilder {
    api_config: OllamaConfig,
    model: Option<String>,
    http_client: Option<Client>,
}

impl OllamaBuilder {
    pub fn with_api_config(mut self, api_config: OllamaConfig) -> Self {
        self.api_config = api_config;
        self
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Overrides the HTTP client. The configured timeout is then up to the
    /// caller.
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> Result<Ollama, LLMError> {
        let client = match self.http_client {
            Some(client) => client,
            None => Client::builder().timeout(self.api_config.timeout()).build()?,
        };

        Ok(Ollama {
            config: self.api_config,
            model: self
                .model
                .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
            client,
        })
    }
}
