use std::time::Duration;

use crate::{
    chain::ChainError,
    llm::{LLMError, LLM},
    output_parser::{OutputParseError, OutputParser, SqlExtractor},
    schema::SchemaStore,
    schema_filter::SchemaFilter,
    schemas::{GenerateSqlRequest, GenerateTextRequest, SqlResponse, TextResponse},
    template::SqlPromptBuilder,
};

use super::{SqlChainBuilder, EMPTY_TEXT_MESSAGE, NO_STATEMENT_MESSAGE};

/// Turns a natural-language question into one SQL statement.
///
/// Each call filters the schema down to the relevant tables, renders the
/// prompt, asks the LLM once and extracts the statement from its answer.
///
/// # Example
/// ```rust,ignore
/// let chain = SqlChain::builder()
///     .llm(Ollama::builder().with_model("mistral").build()?)
///     .schema(SchemaStore::load_or_empty("schema.txt"))
///     .filter_strategy(FilterStrategy::Tables)
///     .build()?;
///
/// let response = chain
///     .generate_sql(&GenerateSqlRequest::new("How many users signed up in May?"))
///     .await;
/// println!("{}", response.sql);
/// ```
pub struct SqlChain {
    pub(super) llm: Box<dyn LLM>,
    pub(super) schema: SchemaStore,
    pub(super) filter: Box<dyn SchemaFilter>,
    pub(super) prompt: SqlPromptBuilder,
    pub(super) extractor: SqlExtractor,
    pub(super) text_timeout: Duration,
}

impl SqlChain {
    pub fn builder() -> SqlChainBuilder {
        SqlChainBuilder::new()
    }

    /// Renders the prompt that [`SqlChain::call`] would send.
    pub fn build_prompt(
        &self,
        question: &str,
        schema_override: Option<&str>,
    ) -> Result<String, ChainError> {
        let schema = self.schema.resolve(schema_override);
        let filtered = self.filter.filter(schema, question);
        log::debug!(
            "Schema reduced from {} to {} bytes",
            schema.len(),
            filtered.len()
        );

        Ok(self.prompt.build(question, &filtered)?)
    }

    pub async fn call(
        &self,
        question: &str,
        schema_override: Option<&str>,
    ) -> Result<String, ChainError> {
        let prompt = self.build_prompt(question, schema_override)?;

        let output = self.llm.invoke(&prompt).await?;
        log::info!("Raw LLM output:\n{output}");

        Ok(self.extractor.parse_from_text(&output)?)
    }

    /// Like [`SqlChain::call`], with every failure folded into the response.
    pub async fn generate_sql(&self, request: &GenerateSqlRequest) -> SqlResponse {
        match self
            .call(&request.question, request.schema_override())
            .await
        {
            Ok(sql) => SqlResponse::sql(sql),
            Err(ChainError::OutputParseError(e)) => {
                log::warn!("{e}");
                SqlResponse::error(unparsed_output_message(&e))
            }
            Err(ChainError::LLMError(e)) => {
                log::error!("LLM call failed: {e}");
                SqlResponse::error(format!("backend error: {e}"))
            }
            Err(e) => {
                log::error!("SQL generation failed: {e}");
                SqlResponse::error(format!("internal error: {e}"))
            }
        }
    }

    /// Sends `prompt` to the LLM as is, giving up after the text timeout.
    pub async fn complete(&self, prompt: &str) -> Result<String, ChainError> {
        let output = tokio::time::timeout(self.text_timeout, self.llm.invoke(prompt))
            .await
            .map_err(|_| LLMError::Timeout(self.text_timeout))??;
        log::info!("Raw LLM output (text):\n{output}");
        Ok(output)
    }

    pub async fn generate_text(&self, request: &GenerateTextRequest) -> TextResponse {
        match self.complete(&request.prompt).await {
            Ok(text) if text.is_empty() => TextResponse::error(EMPTY_TEXT_MESSAGE),
            Ok(text) => TextResponse::text(text),
            Err(ChainError::LLMError(e)) => {
                log::error!("LLM call failed: {e}");
                TextResponse::error(format!("backend error: {e}"))
            }
            Err(e) => {
                log::error!("Text generation failed: {e}");
                TextResponse::error(format!("internal error: {e}"))
            }
        }
    }
}

fn unparsed_output_message(error: &OutputParseError) -> String {
    let raw = error.raw_output().trim();
    if raw.is_empty() {
        NO_STATEMENT_MESSAGE.to_string()
    } else {
        raw.to_string()
    }
}
