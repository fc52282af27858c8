//! Domain Value Objects
//!
//! Immutable value objects describing vectors and nearest-neighbor query
//! requests. Value objects are defined by their attributes and can be
//! compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Vector`] | Ordered sequence of doubles used as a search coordinate |
//! | [`VectorWireValue`] | Protocol record a [`Vector`] is encoded into |
//! | [`DistanceMeasure`] | Metric used to compare stored and query vectors |
//! | [`VectorQueryOptions`] | Caller-supplied nearest-neighbor parameters |
//! | [`FindNearest`] | Validated nearest-neighbor request fragment |

/// Nearest-neighbor request fragment
pub mod find_nearest;
/// Distance measures and query options
pub mod query;
/// Vector value object
pub mod vector;
/// Protocol wire records
pub mod wire;

// Re-export commonly used value objects
pub use find_nearest::{
    FindNearest, Int32Value, PropertyReference, WrappedDouble, validate_query_options,
};
pub use query::{DistanceMeasure, QueryVector, ThresholdComparison, VectorQueryOptions};
pub use vector::Vector;
pub use wire::{ArrayValue, TaggedDouble, VectorWireValue};
