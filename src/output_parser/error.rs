use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputParseError {
    #[error("No SQL statement detected in: {0}")]
    NoStatement(String),

    #[error("Model declined to generate a query: {0}")]
    Refused(String),
}

impl OutputParseError {
    /// The text the parser was given.
    pub fn raw_output(&self) -> &str {
        match self {
            OutputParseError::NoStatement(raw) | OutputParseError::Refused(raw) => raw,
        }
    }
}
