//! Nearest-neighbor query descriptors
//!
//! Distance measures and the options a caller supplies when requesting a
//! nearest-neighbor query.

use crate::error::{Error, Result};
use crate::value_objects::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value Object: Distance Measure
///
/// Metric the database uses to compare a stored vector to the query vector.
/// Serialized with the protocol names `EUCLIDEAN`, `COSINE` and `DOT_PRODUCT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceMeasure {
    /// Straight-line distance; smaller is closer
    #[default]
    #[serde(alias = "euclidean")]
    Euclidean,
    /// Angular distance; smaller is closer
    #[serde(alias = "cosine")]
    Cosine,
    /// Dot product; larger is closer
    #[serde(alias = "dot_product", alias = "dot-product")]
    DotProduct,
}

/// Direction in which a distance threshold cuts off results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdComparison {
    /// Keep results whose distance is `<=` the threshold
    AtMost,
    /// Keep results whose distance is `>=` the threshold
    AtLeast,
}

impl ThresholdComparison {
    /// Whether `distance` passes `threshold` in this direction
    pub fn admits(self, distance: f64, threshold: f64) -> bool {
        match self {
            Self::AtMost => distance <= threshold,
            Self::AtLeast => distance >= threshold,
        }
    }
}

impl DistanceMeasure {
    /// All supported measures
    pub const ALL: [Self; 3] = [Self::Euclidean, Self::Cosine, Self::DotProduct];

    /// Protocol name of the measure
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Euclidean => "EUCLIDEAN",
            Self::Cosine => "COSINE",
            Self::DotProduct => "DOT_PRODUCT",
        }
    }

    /// Threshold direction for this measure
    pub fn threshold_comparison(self) -> ThresholdComparison {
        match self {
            Self::Euclidean | Self::Cosine => ThresholdComparison::AtMost,
            Self::DotProduct => ThresholdComparison::AtLeast,
        }
    }

    /// Whether a result at `distance` is kept under `threshold`
    pub fn within_threshold(self, distance: f64, threshold: f64) -> bool {
        self.threshold_comparison().admits(distance, threshold)
    }
}

impl fmt::Display for DistanceMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMeasure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "EUCLIDEAN" => Ok(Self::Euclidean),
            "COSINE" => Ok(Self::Cosine),
            "DOT_PRODUCT" | "DOTPRODUCT" => Ok(Self::DotProduct),
            _ => Err(Error::invalid_argument(format!(
                "unknown distance measure {s:?}; expected one of EUCLIDEAN, COSINE, DOT_PRODUCT"
            ))),
        }
    }
}

/// Query vector: either a [`Vector`] or a plain sequence of numbers
#[derive(Debug, Clone, PartialEq)]
pub enum QueryVector {
    /// A vector value object
    Vector(Vector),
    /// Plain ordered numbers
    Values(Vec<f64>),
}

impl QueryVector {
    /// Borrow the elements
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Vector(vector) => vector.as_slice(),
            Self::Values(values) => values,
        }
    }

    /// Copy into a [`Vector`]
    pub fn to_vector(&self) -> Vector {
        match self {
            Self::Vector(vector) => vector.clone(),
            Self::Values(values) => Vector::from(values.as_slice()),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether there are no elements
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<Vector> for QueryVector {
    fn from(vector: Vector) -> Self {
        Self::Vector(vector)
    }
}

impl From<Vec<f64>> for QueryVector {
    fn from(values: Vec<f64>) -> Self {
        Self::Values(values)
    }
}

impl From<&[f64]> for QueryVector {
    fn from(values: &[f64]) -> Self {
        Self::Values(values.to_vec())
    }
}

/// Value Object: Nearest-Neighbor Query Options
///
/// Parameters for a nearest-neighbor query. This is a plain descriptor;
/// [`crate::validate_query_options`] checks the caller obligations:
///
/// - `vector_field` names a field present on the target documents
/// - `limit` lies in `[1, 1000]`
/// - `distance_threshold` is compared `<=` for Euclidean and Cosine,
///   `>=` for Dot Product
///
/// ## Example
///
/// ```rust
/// use dsvec_domain::{DistanceMeasure, VectorQueryOptions};
///
/// let options = VectorQueryOptions::new("embedding", vec![1.0, 0.0], 10, DistanceMeasure::DotProduct)
///     .with_distance_threshold(0.75);
/// assert_eq!(options.distance_threshold, Some(0.75));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VectorQueryOptions {
    /// Document field holding the stored vectors
    pub vector_field: String,
    /// Reference point for the distance computation
    pub query_vector: QueryVector,
    /// Maximum number of results
    pub limit: u32,
    /// Metric used for comparison
    pub distance_measure: DistanceMeasure,
    /// Output field the database writes each computed distance into
    pub distance_result_field: Option<String>,
    /// Cutoff applied in the measure's direction
    pub distance_threshold: Option<f64>,
}

impl VectorQueryOptions {
    /// Options with the required parameters and no optional ones
    pub fn new(
        vector_field: impl Into<String>,
        query_vector: impl Into<QueryVector>,
        limit: u32,
        distance_measure: DistanceMeasure,
    ) -> Self {
        Self {
            vector_field: vector_field.into(),
            query_vector: query_vector.into(),
            limit,
            distance_measure,
            distance_result_field: None,
            distance_threshold: None,
        }
    }

    /// Ask the database to write distances into `field`
    #[must_use]
    pub fn with_distance_result_field(mut self, field: impl Into<String>) -> Self {
        self.distance_result_field = Some(field.into());
        self
    }

    /// Drop results beyond `threshold`
    #[must_use]
    pub fn with_distance_threshold(mut self, threshold: f64) -> Self {
        self.distance_threshold = Some(threshold);
        self
    }
}
