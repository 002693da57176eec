pub mod config;
pub mod error;
pub mod llm;
pub mod proxy;
pub mod server;

pub use error::{Error, Result};
