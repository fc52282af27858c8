//! # dsvec
//!
//! Vector values and nearest-neighbor request fragments for a document
//! database's query API.
//!
//! This crate is the public facade: it re-exports the domain and
//! infrastructure layers and hosts the `dsvec` command line tool.
//!
//! ## Example
//!
//! ```rust
//! use dsvec::{DistanceMeasure, FindNearest, Vector, VectorQueryOptions};
//!
//! let vector = Vector::new([1.5, -2.0]);
//! let wire = vector.to_wire();
//! assert_eq!(wire.meaning, 31);
//!
//! let options = VectorQueryOptions::new("embedding", vector, 10, DistanceMeasure::Euclidean);
//! assert!(FindNearest::try_from(&options).is_ok());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, wire records, query options and errors
//! - `infrastructure` - Configuration, logging and request construction
//! - `cli` - Command line front end

pub mod cli;

/// Domain layer - value objects and wire records
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use dsvec_domain::*;
}

/// Infrastructure layer - config, logging and request construction
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use dsvec_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use cli::{Cli, Command, run};
