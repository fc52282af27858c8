//! # dsvec Domain Layer
//!
//! Value objects and wire records used to express nearest-neighbor vector
//! queries against a document database's query API.
//!
//! ## Module Map
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | [`Vector`], wire records, distance measures, query options |
//! | [`error`] | Domain [`Error`] and [`Result`] alias |
//! | [`constants`] | Protocol constants (meaning tag, limit bounds) |
//!
//! ## Example
//!
//! ```rust
//! use dsvec_domain::{DistanceMeasure, FindNearest, Vector, VectorQueryOptions};
//!
//! let query = Vector::new([0.1, 0.2, 0.3]);
//! assert_eq!(query.to_string(), "Vector<0.1, 0.2, 0.3>");
//!
//! let options = VectorQueryOptions::new("embedding", query, 5, DistanceMeasure::Cosine)
//!     .with_distance_result_field("distance");
//! let request = FindNearest::try_from(&options).unwrap();
//! assert_eq!(request.limit.value, 5);
//! ```

pub mod constants;
pub mod error;
pub mod value_objects;

pub use constants::*;
pub use error::{Error, Result};
pub use value_objects::{
    ArrayValue, DistanceMeasure, FindNearest, Int32Value, PropertyReference, QueryVector,
    TaggedDouble, ThresholdComparison, Vector, VectorQueryOptions, VectorWireValue, WrappedDouble,
    validate_query_options,
};
