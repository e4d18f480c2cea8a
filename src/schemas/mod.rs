mod builder_error;
pub use builder_error::*;

mod sql_io;
pub use sql_io::*;

mod text_io;
pub use text_io::*;
