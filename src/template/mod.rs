mod error;
pub use error::*;

mod prompt_template;
pub use prompt_template::*;

mod sql_prompt;
pub use sql_prompt::*;
