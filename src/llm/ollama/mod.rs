mod client;
pub use client::*;

mod config;
pub use config::*;

mod request;
pub use request::*;
