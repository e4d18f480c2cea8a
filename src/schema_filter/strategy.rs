use std::{fmt, str::FromStr};

use thiserror::Error;

use super::{LineKeywordFilter, PassthroughFilter, SchemaFilter, TableBlockFilter};

#[derive(Error, Debug)]
#[error("Unknown filter strategy: {0} (expected one of: tables, lines, none)")]
pub struct UnknownStrategy(String);

/// Selects which [`SchemaFilter`] a chain uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterStrategy {
    /// [`TableBlockFilter`]
    #[default]
    Tables,
    /// [`LineKeywordFilter`]
    Lines,
    /// [`PassthroughFilter`]
    None,
}

impl FilterStrategy {
    pub fn into_filter(self) -> Box<dyn SchemaFilter> {
        match self {
            FilterStrategy::Tables => TableBlockFilter::new().into(),
            FilterStrategy::Lines => LineKeywordFilter.into(),
            FilterStrategy::None => PassthroughFilter.into(),
        }
    }
}

impl FromStr for FilterStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tables" | "table" => Ok(FilterStrategy::Tables),
            "lines" | "line" => Ok(FilterStrategy::Lines),
            "none" | "off" => Ok(FilterStrategy::None),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for FilterStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterStrategy::Tables => write!(f, "tables"),
            FilterStrategy::Lines => write!(f, "lines"),
            FilterStrategy::None => write!(f, "none"),
        }
    }
}
