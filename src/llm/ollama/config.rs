use std::time::Duration;

use url::Url;

use crate::llm::LLMError;

pub const DEFAULT_OLLAMA_HOST: &str = "http://127.0.0.1:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "mistral";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

const GENERATE_PATH: &str = "api/generate";

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    api_base: String,
    timeout: Duration,
}

impl OllamaConfig {
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_OLLAMA_HOST.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Accepts `host:port` as well as full URLs.
    pub fn with_api_base<S: Into<String>>(mut self, api_base: S) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn generate_url(&self) -> Result<Url, LLMError> {
        let base = Url::parse(&normalize_host(&self.api_base))?;
        Ok(base.join(GENERATE_PATH)?)
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim();
    if host.is_empty() {
        return format!("{DEFAULT_OLLAMA_HOST}/");
    }

    let host = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    };
    format!("{}/", host.trim_end_matches('/'))
}
