pub mod sql_database;
pub use sql_database::*;

mod error;
pub use error::*;
