pub mod chain;
pub mod llm;
pub mod output_parser;
pub mod schema;
pub mod schema_filter;
pub mod schemas;
pub mod server;
pub mod template;
