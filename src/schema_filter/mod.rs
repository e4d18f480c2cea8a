//! Reduces a schema description to the parts relevant to a question.
//!
//! Every filter is fail-open: when nothing matches, the full schema is
//! returned so the prompt never loses the context it needs.

#[allow(clippy::module_inception)]
mod schema_filter;
pub use schema_filter::*;

mod keywords;
pub use keywords::*;

mod line_filter;
pub use line_filter::*;

mod table_filter;
pub use table_filter::*;

mod strategy;
pub use strategy::*;
