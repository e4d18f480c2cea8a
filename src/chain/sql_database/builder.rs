use std::time::Duration;

use crate::{
    llm::LLM,
    output_parser::SqlExtractor,
    schema::SchemaStore,
    schema_filter::{FilterStrategy, SchemaFilter},
    schemas::BuilderError,
    template::SqlPromptBuilder,
};

use super::{SqlChain, DEFAULT_TEXT_TIMEOUT};

pub struct SqlChainBuilder {
    llm: Option<Box<dyn LLM>>,
    schema: Option<SchemaStore>,
    filter: Option<Box<dyn SchemaFilter>>,
    prompt: Option<SqlPromptBuilder>,
    text_timeout: Duration,
}

impl SqlChainBuilder {
    pub(super) fn new() -> Self {
        Self {
            llm: None,
            schema: None,
            filter: None,
            prompt: None,
            text_timeout: DEFAULT_TEXT_TIMEOUT,
        }
    }

    pub fn llm(mut self, llm: impl Into<Box<dyn LLM>>) -> Self {
        self.llm = Some(llm.into());
        self
    }

    /// Schema used when a request does not bring its own.
    pub fn schema(mut self, schema: SchemaStore) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn filter(mut self, filter: impl Into<Box<dyn SchemaFilter>>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn filter_strategy(self, strategy: FilterStrategy) -> Self {
        self.filter(strategy.into_filter())
    }

    pub fn prompt(mut self, prompt: SqlPromptBuilder) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Deadline for [`SqlChain::complete`].
    pub fn text_timeout(mut self, timeout: Duration) -> Self {
        self.text_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<SqlChain, BuilderError> {
        let llm = self.llm.ok_or(BuilderError::MissingField("llm"))?;

        Ok(SqlChain {
            llm,
            schema: self.schema.unwrap_or_default(),
            filter: self
                .filter
                .unwrap_or_else(|| FilterStrategy::default().into_filter()),
            prompt: self.prompt.unwrap_or_default(),
            extractor: SqlExtractor::new(),
            text_timeout: self.text_timeout,
        })
    }
}
