#[allow(clippy::module_inception)]
mod output_parser;
pub use output_parser::*;

mod error;
pub use error::*;

mod sql_extractor;
pub use sql_extractor::*;
