pub mod config;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod prompt;
pub mod render;
pub mod server;

pub use error::{Error, Result};
