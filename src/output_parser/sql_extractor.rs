use crate::template::GENERATION_FAILED_SENTINEL;

use super::{OutputParseError, OutputParser};

/// State of a [`SqlScanner`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    /// No line mentioning `select` or `with` seen yet.
    #[default]
    Searching,
    /// Lines are being collected into the statement.
    Collecting,
    /// A `;` was seen. Further lines are ignored.
    Done,
}

/// Line-by-line state machine that locates a SQL statement in model output.
///
/// Starting is permissive (any line mentioning `select` or `with`), so
/// chatter before the statement is skipped. Stopping happens on the first
/// line containing `;`, whatever the state.
#[derive(Debug, Default)]
pub struct SqlScanner<'a> {
    state: ScanState,
    collected: Vec<&'a str>,
}

impl<'a> SqlScanner<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn feed(&mut self, line: &'a str) -> ScanState {
        if self.state == ScanState::Done {
            return self.state;
        }

        if self.state == ScanState::Searching && mentions_statement_keyword(line) {
            self.state = ScanState::Collecting;
        }
        if self.state == ScanState::Collecting {
            self.collected.push(line);
        }
        if line.contains(';') {
            self.state = ScanState::Done;
        }

        self.state
    }

    /// Joins the collected lines and keeps the result only if it actually
    /// starts with `SELECT` or `WITH`.
    pub fn finish(self) -> Option<String> {
        let sql = self.collected.join(" ").trim().to_string();
        starts_with_statement_keyword(&sql).then_some(sql)
    }
}

fn mentions_statement_keyword(line: &str) -> bool {
    let line = line.to_lowercase();
    line.contains("select") || line.contains("with")
}

fn starts_with_statement_keyword(sql: &str) -> bool {
    let sql = sql.to_lowercase();
    sql.starts_with("select") || sql.starts_with("with")
}

/// Outcome of reading one model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Statement(String),
    /// The model answered with [`GENERATION_FAILED_SENTINEL`].
    Refused,
    NotFound,
}

/// Pulls the first SQL statement out of free-form model output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlExtractor;

impl SqlExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        let mut scanner = SqlScanner::new();
        for line in text.trim().lines() {
            if scanner.feed(line) == ScanState::Done {
                break;
            }
        }
        scanner.finish()
    }

    pub fn classify(&self, text: &str) -> Extraction {
        match self.extract(text) {
            Some(sql) => Extraction::Statement(sql),
            None if text.contains(GENERATION_FAILED_SENTINEL) => Extraction::Refused,
            None => Extraction::NotFound,
        }
    }
}

impl OutputParser for SqlExtractor {
    type Output = String;

    fn parse_from_text(&self, output: &str) -> Result<String, OutputParseError> {
        match self.classify(output) {
            Extraction::Statement(sql) => Ok(sql),
            Extraction::Refused => Err(OutputParseError::Refused(output.to_string())),
            Extraction::NotFound => Err(OutputParseError::NoStatement(output.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_skips_chatter_and_stops_at_semicolon() {
        let text = "Sure, here you go:\nSELECT * FROM \"Users\";\nHope that helps!";
        assert_eq!(
            SqlExtractor::new().extract(text),
            Some("SELECT * FROM \"Users\";".to_string())
        );
    }

    #[test]
    fn test_no_statement() {
        assert_eq!(SqlExtractor::new().extract("I cannot determine the answer."), None);
        assert_eq!(SqlExtractor::new().extract(""), None);
    }

    #[test]
    fn test_joins_multiline_statement() {
        let text = indoc! {r#"
            WITH totals AS (
              SELECT user_id, SUM(total) AS spent
              FROM "Orders" GROUP BY user_id
            )
            SELECT * FROM totals;
            -- trailing comment
        "#};

        assert_eq!(
            SqlExtractor::new().extract(text),
            Some(
                "WITH totals AS (   SELECT user_id, SUM(total) AS spent   FROM \"Orders\" \
                 GROUP BY user_id ) SELECT * FROM totals;"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert_eq!(
            SqlExtractor::new().extract("select 1;"),
            Some("select 1;".to_string())
        );
    }

    #[test]
    fn test_without_semicolon_collects_to_the_end() {
        let text = "SELECT id\nFROM users\nORDER BY id";
        assert_eq!(
            SqlExtractor::new().extract(text),
            Some("SELECT id FROM users ORDER BY id".to_string())
        );
    }

    #[test]
    fn test_semicolon_before_statement_stops_the_scan() {
        let text = "Note: one statement only;\nSELECT 1;";
        assert_eq!(SqlExtractor::new().extract(text), None);
    }

    #[test]
    fn test_keyword_inside_chatter_is_rejected() {
        // "with" starts collection on the chatter line, which then fails the
        // start check
        let text = "Here is a query with a join:\nSELECT * FROM a JOIN b ON a.id = b.id;";
        assert_eq!(SqlExtractor::new().extract(text), None);
    }

    #[test]
    fn test_markdown_fence_on_own_lines() {
        let text = "```sql\nSELECT 1;\n```";
        assert_eq!(SqlExtractor::new().extract(text), Some("SELECT 1;".to_string()));

        // Inline fences break the start check
        let text = "```sql SELECT 1;```";
        assert_eq!(SqlExtractor::new().extract(text), None);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let extractor = SqlExtractor::new();
        let texts = [
            "Sure:\nSELECT *\nFROM users;\nbye",
            "WITH x AS (SELECT 1)\nSELECT * FROM x",
            "select name from \"Users\" where id = 3;",
        ];

        for text in texts {
            let once = extractor.extract(text).unwrap();
            assert_eq!(extractor.extract(&once), Some(once.clone()));
        }
    }

    #[test]
    fn test_result_always_starts_with_keyword() {
        let extractor = SqlExtractor::new();
        let texts = [
            "",
            "nothing here",
            ";",
            "with",
            "   \n  select  \n",
            "Without doubt:\nSELECT 1;",
            "I selected this: SELECT 2;",
            "WITH a AS (SELECT 1) SELECT * FROM a;",
            "Erreur : impossible de générer",
        ];

        for text in texts {
            if let Some(sql) = extractor.extract(text) {
                let sql = sql.to_lowercase();
                assert!(sql.starts_with("select") || sql.starts_with("with"), "{sql}");
                assert_eq!(sql, sql.trim());
            }
        }
    }

    #[test]
    fn test_scanner_states() {
        let mut scanner = SqlScanner::new();
        assert_eq!(scanner.state(), ScanState::Searching);
        assert_eq!(scanner.feed("Here it is"), ScanState::Searching);
        assert_eq!(scanner.feed("SELECT id"), ScanState::Collecting);
        assert_eq!(scanner.feed("FROM users"), ScanState::Collecting);
        assert_eq!(scanner.feed("WHERE id = 1;"), ScanState::Done);
        assert_eq!(scanner.feed("SELECT 2;"), ScanState::Done);
        assert_eq!(
            scanner.finish(),
            Some("SELECT id FROM users WHERE id = 1;".to_string())
        );
    }

    #[test]
    fn test_classify() {
        let extractor = SqlExtractor::new();

        assert_eq!(
            extractor.classify("SELECT 1;"),
            Extraction::Statement("SELECT 1;".to_string())
        );
        assert_eq!(
            extractor.classify("Erreur : impossible de générer."),
            Extraction::Refused
        );
        assert_eq!(extractor.classify("No idea."), Extraction::NotFound);
    }

    #[test]
    fn test_parse_from_text_keeps_raw_output() {
        let err = SqlExtractor::new()
            .parse_from_text("I cannot determine the answer.")
            .unwrap_err();

        assert!(matches!(err, OutputParseError::NoStatement(_)));
        assert_eq!(err.raw_output(), "I cannot determine the answer.");
    }
}
