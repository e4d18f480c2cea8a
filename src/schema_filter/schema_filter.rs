use std::borrow::Cow;

pub trait SchemaFilter: Send + Sync {
    /// Returns the subset of `schema` relevant to `question`, or `schema`
    /// itself when no part of it matches.
    fn filter<'a>(&self, schema: &'a str, question: &str) -> Cow<'a, str>;
}

impl<F> From<F> for Box<dyn SchemaFilter>
where
    F: 'static + SchemaFilter,
{
    fn from(filter: F) -> Self {
        Box::new(filter)
    }
}

/// Returns the schema untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFilter;

impl SchemaFilter for PassthroughFilter {
    fn filter<'a>(&self, schema: &'a str, _question: &str) -> Cow<'a, str> {
        Cow::Borrowed(schema)
    }
}
