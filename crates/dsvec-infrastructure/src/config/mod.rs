//! Configuration
//!
//! Layered configuration: serialized defaults, then a TOML file, then
//! `DSVEC__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, QueryDefaultsConfig};
