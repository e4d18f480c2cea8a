use std::path::Path;

use super::SchemaError;

pub const DEFAULT_SCHEMA_PATH: &str = "schema.txt";

/// Schema description loaded once at startup and read-only afterwards.
///
/// The store is owned by whoever serves requests and handed out by reference,
/// so concurrent readers need no synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaStore {
    text: String,
}

impl SchemaStore {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded schema from {} ({} bytes)", path.display(), text.len());
        Ok(Self::new(text))
    }

    /// Like [`SchemaStore::load`], but a missing or unreadable file yields an
    /// empty store and a warning instead of an error.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; continuing with an empty schema");
            Self::default()
        })
    }

    pub fn current(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Picks the schema for one request. A non-empty override replaces the
    /// stored schema entirely.
    pub fn resolve<'a>(&'a self, schema_override: Option<&'a str>) -> &'a str {
        match schema_override {
            Some(schema) if !schema.is_empty() => schema,
            _ => &self.text,
        }
    }
}
