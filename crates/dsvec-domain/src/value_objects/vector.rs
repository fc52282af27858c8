//! Vector Value Object
//!
//! The coordinate type used by nearest-neighbor queries, together with its
//! conversions to and from the protocol wire record.

use crate::constants::VECTOR_MEANING;
use crate::error::{Error, Result};
use crate::value_objects::wire::VectorWireValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value Object: Vector
///
/// An ordered, fixed sequence of double-precision numbers. Order is
/// significant and any real value (including duplicates and non-finite
/// values) is kept as given.
///
/// ## Business Rules
///
/// - Immutable: [`Vector::slice`] returns a new instance
/// - Equality is element-wise and position-sensitive
/// - NaN elements in the same position compare equal, so every vector
///   equals itself
///
/// ## Example
///
/// ```rust
/// use dsvec_domain::Vector;
///
/// let vector = Vector::new([1, 2, 3]);
/// assert_eq!(vector.len(), 3);
/// assert_eq!(vector.get(1), Some(2.0));
/// assert_eq!(vector.get(7), None);
/// assert_eq!(vector.slice(Some(-2), None), Vector::new([2, 3]));
/// assert_eq!(vector.to_string(), "Vector<1, 2, 3>");
/// ```
///
/// Vectors only compare against other vectors; a plain array is rejected at
/// compile time:
///
/// ```compile_fail
/// use dsvec_domain::Vector;
///
/// let _ = Vector::new([1, 2, 3]) == [1.0, 2.0, 3.0];
/// ```
///
/// ```compile_fail
/// use dsvec_domain::Vector;
///
/// let _ = Vector::new([1, 2, 3]) == vec![1.0, 2.0, 3.0];
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// Build a vector from any sequence of values convertible to `f64`
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Copy of the half-open range `[start, end)`
    ///
    /// Negative indices count back from the end, out-of-range indices are
    /// clamped to the bounds, and `None` means "from the beginning" for
    /// `start` and "to the end" for `end`. An empty vector is returned when
    /// the resolved end does not lie past the resolved start.
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> Self {
        let len = self.values.len();
        let from = start.map_or(0, |index| resolve_index(index, len));
        let to = end.map_or(len, |index| resolve_index(index, len));
        if to <= from {
            return Self::default();
        }
        Self {
            values: self.values[from..to].to_vec(),
        }
    }

    /// Borrow the elements
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consume the vector, returning its elements
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }

    /// Encode into the protocol record the document database expects
    pub fn to_wire(&self) -> VectorWireValue {
        VectorWireValue::from_values(&self.values)
    }

    /// Decode a vector-tagged array value
    ///
    /// Fails when the record is not tagged with [`VECTOR_MEANING`].
    pub fn from_wire(wire: &VectorWireValue) -> Result<Self> {
        if wire.meaning != VECTOR_MEANING {
            return Err(Error::wire_format(format!(
                "expected meaning {VECTOR_MEANING} for a vector value, found {}",
                wire.meaning
            )));
        }
        Ok(wire.values().collect())
    }
}

/// Resolve a possibly negative index against `len`, clamping into `[0, len]`
fn resolve_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

impl PartialEq for Vector {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }
}

impl Eq for Vector {}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector<")?;
        for (position, value) in self.values.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write_number(f, *value)?;
        }
        f.write_str(">")
    }
}

/// Magnitudes outside `[1e-6, 1e21)` are written in exponent form (`1e+21`, `1.5e-7`)
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value.abs() >= EXPONENT_FORM_UPPER || value.abs() < EXPONENT_FORM_LOWER {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{value}")
    }
}

const EXPONENT_FORM_UPPER: f64 = 1e21;
const EXPONENT_FORM_LOWER: f64 = 1e-6;

/// Parses `1, 2, 3`, `[1 2 3]` or `Vector<1, 2, 3>`.
///
/// Every token must be a number; anything else is rejected rather than
/// turned into NaN.
impl FromStr for Vector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        strip_delimiters(s.trim())
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token.parse::<f64>().map_err(|_| {
                    Error::invalid_argument(format!(
                        "vector element {position} is not a number: {token:?}"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::from)
    }
}

fn strip_delimiters(text: &str) -> &str {
    let text = text.strip_prefix("Vector").map_or(text, str::trim_start);
    for (open, close) in [('[', ']'), ('<', '>')] {
        if let Some(inner) = text.strip_prefix(open).and_then(|t| t.strip_suffix(close)) {
            return inner;
        }
    }
    text
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.values
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<&VectorWireValue> for Vector {
    type Error = Error;

    fn try_from(wire: &VectorWireValue) -> Result<Self> {
        Self::from_wire(wire)
    }
}

impl From<&Vector> for VectorWireValue {
    fn from(vector: &Vector) -> Self {
        vector.to_wire()
    }
}
