use serde::{Deserialize, Serialize};

/// Body of a `/generate-sql` request.
///
/// An empty `schema` means "use the schema loaded at startup".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSqlRequest {
    #[serde(alias = "user_question")]
    pub question: String,
    #[serde(default)]
    pub schema: String,
}

impl GenerateSqlRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            schema: String::new(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// The caller-supplied schema, if any.
    pub fn schema_override(&self) -> Option<&str> {
        (!self.schema.is_empty()).then_some(self.schema.as_str())
    }
}

/// Result of a SQL generation. Exactly one of `sql` and `error` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlResponse {
    pub sql: String,
    pub error: String,
}

impl SqlResponse {
    pub fn sql(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            error: String::new(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            sql: String::new(),
            error: error.into(),
        }
    }
}
