use std::time::Duration;

mod builder;
pub use builder::*;

mod chain;
pub use chain::*;

const NO_STATEMENT_MESSAGE: &str = "no SQL statement detected";
const EMPTY_TEXT_MESSAGE: &str = "backend returned an empty response";

/// Backend deadline for `/generate-text`. SQL generation is bounded by the
/// client timeout instead.
pub const DEFAULT_TEXT_TIMEOUT: Duration = Duration::from_secs(300);
