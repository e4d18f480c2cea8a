use crate::output_parser::OutputParseError;

pub trait OutputParser: Send + Sync {
    type Output;

    fn parse_from_text(&self, output: &str) -> Result<Self::Output, OutputParseError>;
}
