use indoc::indoc;

use super::{PromptTemplate, TemplateError};

/// Literal answer the model is told to give when it cannot write a query.
/// The extractor recognises it, so it must never be translated or reworded.
pub const GENERATION_FAILED_SENTINEL: &str = "Erreur : impossible de générer";

pub const DEFAULT_SQL_DIALECT: &str = "PostgreSQL";

pub const DEFAULT_SQL_TEMPLATE: &str = indoc! {r#"
    You are an AI assistant that writes {{dialect}} SQL queries.
    Here is the database schema (exact names, in double quotes where required):

    {{schema}}

    The user asks: "{{question}}"

    Strict rules:
    - Output only the executable SQL query, with no explanation and no Markdown formatting.
    - Start the query with SELECT or WITH only.
    - Use table and column names exactly as given in the schema, keeping the double quotes when the schema has them.
    - Never invent a column. If a column is not in the schema, do not use it.
    - If the query is impossible, answer exactly: {{failure_sentinel}}
"#};

/// Renders the SQL generation prompt for one question.
#[derive(Debug, Clone)]
pub struct SqlPromptBuilder {
    template: PromptTemplate,
    dialect: String,
}

impl SqlPromptBuilder {
    pub fn new() -> Self {
        Self {
            template: PromptTemplate::from_jinja2(DEFAULT_SQL_TEMPLATE),
            dialect: DEFAULT_SQL_DIALECT.into(),
        }
    }

    pub fn with_dialect<S: Into<String>>(mut self, dialect: S) -> Self {
        self.dialect = dialect.into();
        self
    }

    /// Replaces the default template. Available variables are `dialect`,
    /// `schema`, `question` and `failure_sentinel`.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn build(&self, question: &str, schema: &str) -> Result<String, TemplateError> {
        let input = crate::text_replacements! {
            "dialect" => self.dialect.as_str(),
            "schema" => schema,
            "question" => question,
            "failure_sentinel" => GENERATION_FAILED_SENTINEL,
        };

        self.template.format(&input)
    }
}

impl Default for SqlPromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_layout() {
        let schema = "1. \"Users\" (id, name)";
        let prompt = SqlPromptBuilder::new()
            .build("list all users", schema)
            .unwrap();

        let preamble = prompt.find("PostgreSQL").unwrap();
        let schema_at = prompt.find(schema).unwrap();
        let question_at = prompt.find("\"list all users\"").unwrap();
        let rules_at = prompt.find("Strict rules:").unwrap();

        assert!(preamble < schema_at);
        assert!(schema_at < question_at);
        assert!(question_at < rules_at);
    }

    #[test]
    fn test_prompt_contains_constraints() {
        let prompt = SqlPromptBuilder::new().build("q", "s").unwrap();

        assert!(prompt.contains("no Markdown"));
        assert!(prompt.contains("SELECT or WITH"));
        assert!(prompt.contains("double quotes"));
        assert!(prompt.contains("Never invent a column"));
        assert!(prompt.contains("answer exactly: Erreur : impossible de générer"));
    }

    #[test]
    fn test_custom_dialect() {
        let prompt = SqlPromptBuilder::new()
            .with_dialect("SQLite")
            .build("q", "s")
            .unwrap();

        assert!(prompt.starts_with("You are an AI assistant that writes SQLite SQL queries."));
    }

    #[test]
    fn test_schema_is_verbatim() {
        let schema = "1. \"Odd\" ({{question}}, \"Col\")";
        let prompt = SqlPromptBuilder::new().build("why", schema).unwrap();
        assert!(prompt.contains(schema));
    }

    #[test]
    fn test_custom_template_missing_variable() {
        let builder =
            SqlPromptBuilder::new().with_template(PromptTemplate::from_jinja2("{{unknown}}"));
        assert!(matches!(
            builder.build("q", "s"),
            Err(TemplateError::MissingVariable(_))
        ));
    }
}
