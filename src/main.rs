//! text2sql HTTP server
//!
//! Answers natural-language questions with SQL generated by a local Ollama
//! model.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use text2sql::{
    chain::SqlChain,
    llm::{Ollama, OllamaConfig, DEFAULT_OLLAMA_HOST, DEFAULT_OLLAMA_MODEL},
    schema::{SchemaStore, DEFAULT_SCHEMA_PATH},
    schema_filter::FilterStrategy,
    server,
    template::{SqlPromptBuilder, DEFAULT_SQL_DIALECT},
};

#[derive(Parser)]
#[command(name = "text2sql")]
#[command(about = "Natural-language to SQL server backed by Ollama")]
struct Args {
    /// Schema description loaded at startup
    #[arg(long, env = "TEXT2SQL_SCHEMA", default_value = DEFAULT_SCHEMA_PATH)]
    schema: PathBuf,

    /// Port to listen on
    #[arg(short, long, env = "TEXT2SQL_PORT", default_value = "8000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "TEXT2SQL_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Ollama server address
    #[arg(long, env = "OLLAMA_HOST", default_value = DEFAULT_OLLAMA_HOST)]
    ollama_host: String,

    /// Model used for generation
    #[arg(long, env = "OLLAMA_MODEL", default_value = DEFAULT_OLLAMA_MODEL)]
    model: String,

    /// Seconds to wait for the model on /generate-sql
    #[arg(long, env = "TEXT2SQL_TIMEOUT", default_value = "600")]
    timeout: u64,

    /// Seconds to wait for the model on /generate-text
    #[arg(long, env = "TEXT2SQL_TEXT_TIMEOUT", default_value = "300")]
    text_timeout: u64,

    /// Schema filtering: tables, lines or none
    #[arg(long, env = "TEXT2SQL_FILTER", default_value = "tables")]
    filter: FilterStrategy,

    /// SQL dialect named in the prompt
    #[arg(long, env = "TEXT2SQL_DIALECT", default_value = DEFAULT_SQL_DIALECT)]
    dialect: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("text2sql=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let schema = SchemaStore::load_or_empty(&args.schema);

    let llm = Ollama::builder()
        .with_api_config(
            OllamaConfig::default()
                .with_api_base(&args.ollama_host)
                .with_timeout(Duration::from_secs(args.timeout)),
        )
        .with_model(&args.model)
        .build()?;

    let chain = SqlChain::builder()
        .llm(llm)
        .schema(schema)
        .filter_strategy(args.filter)
        .prompt(SqlPromptBuilder::new().with_dialect(&args.dialect))
        .text_timeout(Duration::from_secs(args.text_timeout))
        .build()?;

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Listening on http://{} (model {}, filter {})",
        addr, args.model, args.filter
    );

    server::serve(listener, Arc::new(chain)).await?;

    Ok(())
}
