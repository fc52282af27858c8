//! Nearest-neighbor request fragment
//!
//! Turns [`VectorQueryOptions`] into the `find_nearest` record the query API
//! accepts, after checking the caller obligations the options carry.

use crate::constants::{MAX_NEAREST_LIMIT, MAX_VECTOR_DIMENSION, MIN_NEAREST_LIMIT};
use crate::error::{Error, Result};
use crate::value_objects::{DistanceMeasure, VectorQueryOptions, VectorWireValue};
use serde::{Deserialize, Serialize};

/// Reference to a document field by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyReference {
    /// Field name
    pub name: String,
}

/// Wrapped 32-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Int32Value {
    /// Wrapped value
    pub value: i32,
}

/// Wrapped double
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrappedDouble {
    /// Wrapped value
    pub value: f64,
}

/// Value Object: Nearest-Neighbor Request
///
/// ```text
/// {
///   vector_property: { name: <field> },
///   query_vector: <vector wire record>,
///   distance_measure: "EUCLIDEAN" | "COSINE" | "DOT_PRODUCT",
///   limit: { value: <limit> },
///   distance_result_property: <field>,     (only when set)
///   distance_threshold: { value: <f64> }   (only when set)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindNearest {
    /// Field holding the stored vectors
    pub vector_property: PropertyReference,
    /// Encoded query vector
    pub query_vector: VectorWireValue,
    /// Metric used for comparison
    pub distance_measure: DistanceMeasure,
    /// Maximum number of results
    pub limit: Int32Value,
    /// Output field for the computed distance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_result_property: Option<String>,
    /// Cutoff applied in the measure's direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_threshold: Option<WrappedDouble>,
}

impl FindNearest {
    /// Render as a JSON value
    pub fn to_json(&self) -> Result<serde_json::Value> {
        // Surfaces non-finite elements before serde_json turns them into null.
        self.query_vector.to_json()?;
        Ok(serde_json::to_value(self)?)
    }
}

impl TryFrom<&VectorQueryOptions> for FindNearest {
    type Error = Error;

    fn try_from(options: &VectorQueryOptions) -> Result<Self> {
        validate_query_options(options)?;
        let limit = i32::try_from(options.limit)
            .map_err(|_| Error::invalid_argument(format!("limit {} overflows", options.limit)))?;

        Ok(Self {
            vector_property: PropertyReference {
                name: options.vector_field.clone(),
            },
            query_vector: VectorWireValue::from_values(options.query_vector.as_slice()),
            distance_measure: options.distance_measure,
            limit: Int32Value { value: limit },
            distance_result_property: options.distance_result_field.clone(),
            distance_threshold: options
                .distance_threshold
                .map(|value| WrappedDouble { value }),
        })
    }
}

impl TryFrom<VectorQueryOptions> for FindNearest {
    type Error = Error;

    fn try_from(options: VectorQueryOptions) -> Result<Self> {
        Self::try_from(&options)
    }
}

/// Check the caller obligations carried by nearest-neighbor options
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming the first offending field when:
/// - `vector_field` is blank
/// - `limit` is outside `[1, 1000]`
/// - the query vector is empty, longer than [`MAX_VECTOR_DIMENSION`], or
///   holds a non-finite element
/// - `distance_result_field` is present but blank
/// - `distance_threshold` is present but not finite
pub fn validate_query_options(options: &VectorQueryOptions) -> Result<()> {
    if options.vector_field.trim().is_empty() {
        return Err(Error::invalid_argument("vector_field must not be empty"));
    }

    if !(MIN_NEAREST_LIMIT..=MAX_NEAREST_LIMIT).contains(&options.limit) {
        return Err(Error::invalid_argument(format!(
            "limit must be between {MIN_NEAREST_LIMIT} and {MAX_NEAREST_LIMIT}, got {}",
            options.limit
        )));
    }

    let values = options.query_vector.as_slice();
    if values.is_empty() {
        return Err(Error::invalid_argument("query_vector must not be empty"));
    }
    if values.len() > MAX_VECTOR_DIMENSION {
        return Err(Error::invalid_argument(format!(
            "query_vector has {} dimensions, at most {MAX_VECTOR_DIMENSION} are supported",
            values.len()
        )));
    }
    if let Some(position) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::invalid_argument(format!(
            "query_vector element {position} is not finite"
        )));
    }

    if let Some(field) = &options.distance_result_field {
        if field.trim().is_empty() {
            return Err(Error::invalid_argument(
                "distance_result_field must not be empty when set",
            ));
        }
    }

    if let Some(threshold) = options.distance_threshold {
        if !threshold.is_finite() {
            return Err(Error::invalid_argument(format!(
                "distance_threshold must be finite, got {threshold}"
            )));
        }
    }

    Ok(())
}
