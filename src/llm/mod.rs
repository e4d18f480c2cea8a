#[allow(clippy::module_inception)]
mod llm;
pub use llm::*;

mod error;
pub use error::*;

pub mod ollama;
pub use ollama::*;
