//! Domain layer constants
//!
//! Values fixed by the document database protocol. They are shared by the
//! wire encoding and by request validation.

// ============================================================================
// WIRE FORMAT CONSTANTS
// ============================================================================

/// Meaning tag marking an array value as a vector
pub const VECTOR_MEANING: i32 = 31;

// ============================================================================
// NEAREST-NEIGHBOR QUERY CONSTANTS
// ============================================================================

/// Smallest accepted result limit for a nearest-neighbor query
pub const MIN_NEAREST_LIMIT: u32 = 1;

/// Largest accepted result limit for a nearest-neighbor query
pub const MAX_NEAREST_LIMIT: u32 = 1000;

/// Largest number of dimensions a query vector may carry
pub const MAX_VECTOR_DIMENSION: usize = 2048;
