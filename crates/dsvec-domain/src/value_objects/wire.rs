//! Protocol wire records
//!
//! Serde mirrors of the document database's value representation. Field
//! names match the protocol exactly; do not rename them.

use crate::constants::VECTOR_MEANING;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single array element carrying a double
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaggedDouble {
    /// The element value
    pub double_value: f64,
}

/// Array payload of a value record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    /// Elements in order
    pub values: Vec<TaggedDouble>,
}

/// Wire record for a vector field
///
/// ```text
/// {
///   array_value: { values: [ { double_value: <f64> }, ... ] },
///   meaning: 31,
///   exclude_from_indexes: true
/// }
/// ```
///
/// Vectors are served by dedicated vector indexes, so the record always
/// opts out of standard indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorWireValue {
    /// The tagged elements
    pub array_value: ArrayValue,
    /// Protocol meaning tag; [`VECTOR_MEANING`] for vectors
    pub meaning: i32,
    /// Whether the database should skip standard indexing of the field
    #[serde(default)]
    pub exclude_from_indexes: bool,
}

impl VectorWireValue {
    /// Build the vector record for the given elements
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            array_value: ArrayValue {
                values: values
                    .iter()
                    .map(|&double_value| TaggedDouble { double_value })
                    .collect(),
            },
            meaning: VECTOR_MEANING,
            exclude_from_indexes: true,
        }
    }

    /// Element values in order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.array_value.values.iter().map(|v| v.double_value)
    }

    /// Render as a JSON value
    ///
    /// JSON has no representation for NaN or infinities, so records holding
    /// them are rejected instead of being emitted with `null` elements.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        if let Some(position) = self.values().position(|v| !v.is_finite()) {
            return Err(Error::wire_format(format!(
                "element {position} is not finite and cannot be encoded as JSON"
            )));
        }
        Ok(serde_json::to_value(self)?)
    }

    /// Render as a pretty-printed JSON document
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json()?)?)
    }

    /// Parse a record from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
