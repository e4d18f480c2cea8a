use std::borrow::Cow;

use super::{extract_keywords, SchemaFilter};

/// Keeps every schema line that mentions one of the question's keywords.
///
/// Coarser than [`super::TableBlockFilter`]: a column name shared by many
/// tables pulls all of their lines in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineKeywordFilter;

impl SchemaFilter for LineKeywordFilter {
    fn filter<'a>(&self, schema: &'a str, question: &str) -> Cow<'a, str> {
        let keywords = extract_keywords(question);

        let kept = schema
            .lines()
            .filter(|line| {
                let line = line.to_lowercase();
                keywords.iter().any(|keyword| line.contains(keyword.as_str()))
            })
            .collect::<Vec<_>>();

        if kept.is_empty() {
            log::debug!("No schema line matched the question, using the full schema");
            return Cow::Borrowed(schema);
        }

        log::debug!("Kept {} schema lines for the question", kept.len());
        Cow::Owned(kept.join("\n"))
    }
}
