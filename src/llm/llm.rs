use async_trait::async_trait;

use crate::llm::LLMError;

/// A text-generation backend: one prompt in, one completion out.
#[async_trait]
pub trait LLM: Sync + Send {
    async fn invoke(&self, prompt: &str) -> Result<String, LLMError>;
}

impl<L> From<L> for Box<dyn LLM>
where
    L: 'static + LLM,
{
    fn from(llm: L) -> Self {
        Box::new(llm)
    }
}
