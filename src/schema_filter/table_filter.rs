use std::borrow::Cow;

use regex::Regex;

use super::{extract_keywords, SchemaFilter};

/// One numbered table entry of a schema description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock<'a> {
    /// Lowercased table identifier with surrounding quotes removed.
    pub name: String,
    pub header: &'a str,
    pub body: Vec<&'a str>,
}

impl TableBlock<'_> {
    pub fn text(&self) -> String {
        let mut lines = Vec::with_capacity(self.body.len() + 1);
        lines.push(self.header);
        lines.extend(self.body.iter().copied());
        lines.join("\n").trim_end().to_string()
    }
}

/// Keeps the schema entries whose table name contains one of the question's
/// keywords.
///
/// The schema is expected to be a numbered list, one entry per table:
///
/// ```text
/// 1. "Users" (id, name)
/// 2. "Orders" (id, user_id)
/// ```
///
/// Only the table identifier is matched, never column names.
#[derive(Debug, Clone)]
pub struct TableBlockFilter {
    marker: Regex,
}

impl TableBlockFilter {
    pub fn new() -> Self {
        let marker = Regex::new(r"^\d+\. ").expect("Static regex is valid");
        Self { marker }
    }

    /// Splits `schema` at its numbered-list markers. Anything before the
    /// first marker is dropped.
    pub fn split_blocks<'a>(&self, schema: &'a str) -> Vec<TableBlock<'a>> {
        let mut blocks: Vec<TableBlock<'a>> = Vec::new();

        for line in schema.lines() {
            match self.marker.find(line) {
                Some(marker) => blocks.push(TableBlock {
                    name: table_name(&line[marker.end()..]),
                    header: line,
                    body: Vec::new(),
                }),
                None => {
                    if let Some(block) = blocks.last_mut() {
                        block.body.push(line);
                    }
                }
            }
        }

        blocks
    }
}

impl Default for TableBlockFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaFilter for TableBlockFilter {
    fn filter<'a>(&self, schema: &'a str, question: &str) -> Cow<'a, str> {
        let keywords = extract_keywords(question);
        let blocks = self.split_blocks(schema);

        // Grouped by table name, in order of first appearance. Every block is
        // still emitted on its own, separated by a blank line.
        let mut selected: Vec<(&str, Vec<String>)> = Vec::new();
        for block in &blocks {
            if !keywords
                .iter()
                .any(|keyword| block.name.contains(keyword.as_str()))
            {
                continue;
            }

            match selected.iter_mut().find(|(name, _)| *name == block.name) {
                Some((_, texts)) => texts.push(block.text()),
                None => selected.push((block.name.as_str(), vec![block.text()])),
            }
        }

        if selected.is_empty() {
            log::debug!(
                "No table out of {} matched the question, using the full schema",
                blocks.len()
            );
            return Cow::Borrowed(schema);
        }

        log::debug!(
            "Selected tables: {}",
            selected
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Cow::Owned(
            selected
                .into_iter()
                .flat_map(|(_, texts)| texts)
                .collect::<Vec<_>>()
                .join("\n\n"),
        )
    }
}

fn table_name(header: &str) -> String {
    header
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_matches('"')
        .to_lowercase()
}
