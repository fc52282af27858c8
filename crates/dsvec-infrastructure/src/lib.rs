//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns supporting the domain layer.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML/env configuration via Figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Request Construction
//! | Module | Description |
//! |--------|-------------|
//! | [`query`] | Nearest-neighbor requests built against configured defaults |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod query;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig, QueryDefaultsConfig};
pub use error_ext::ErrorContext;
pub use query::{NearestQueryOverrides, NearestQueryService};
