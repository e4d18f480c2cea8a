mod error;
pub use error::*;

mod store;
pub use store::*;
