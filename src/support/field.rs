//! Elementwise physical fields.
//!
//! Every quantity consumed or produced by the models in this crate is a
//! [`Field`]: either a single scalar or a one-dimensional array of values.
//! Scalars broadcast against arrays of any length; arrays conform only when
//! their lengths match. There is no cross-element dependency anywhere in the
//! crate, so elementwise evaluation order never affects results.

use ndarray::Array1;
use thiserror::Error;

/// Errors that may occur when conforming fields to a common shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Two array-valued fields have different lengths.
    #[error("cannot broadcast arrays of length {left} and {right}")]
    ShapeMismatch { left: usize, right: usize },
}

/// A scalar or array-valued physical quantity.
///
/// Fields are immutable values. Models never mutate a field in place; each
/// estimator consumes fields and produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// A single value, broadcastable to any length.
    Scalar(f64),
    /// A one-dimensional array of values.
    Array(Array1<f64>),
}

impl Field {
    /// Returns the array length, or `None` for a scalar.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(values) => Some(values.len()),
        }
    }

    /// Returns `true` if this field is a single scalar value.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Broadcast-aware element access.
    ///
    /// A scalar yields its value for any index.
    ///
    /// # Panics
    ///
    /// Panics if this field is an array and `index` is out of bounds.
    /// Callers are expected to stay within the conformed length reported by
    /// [`broadcast_len`].
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        match self {
            Self::Scalar(value) => *value,
            Self::Array(values) => values[index],
        }
    }

    /// Applies a function to every element, preserving shape.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Self::Scalar(value) => Self::Scalar(f(*value)),
            Self::Array(values) => Self::Array(values.mapv(&f)),
        }
    }

    /// Assembles a field from a conformed length and elementwise results.
    ///
    /// A length of `None` collapses back to a scalar, so scalar-only inputs
    /// produce scalar outputs.
    pub(crate) fn from_parts(len: Option<usize>, mut values: Vec<f64>) -> Self {
        match len {
            None => Self::Scalar(values.remove(0)),
            Some(_) => Self::Array(Array1::from_vec(values)),
        }
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Field {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(Array1::from_vec(values))
    }
}

impl From<Array1<f64>> for Field {
    fn from(values: Array1<f64>) -> Self {
        Self::Array(values)
    }
}

/// Conforms a set of fields to a common broadcast length.
///
/// Returns `None` when every field is a scalar, or `Some(len)` when at least
/// one field is an array.
///
/// # Errors
///
/// Returns [`FieldError::ShapeMismatch`] if two array-valued fields have
/// different lengths.
pub fn broadcast_len<'a, I>(fields: I) -> Result<Option<usize>, FieldError>
where
    I: IntoIterator<Item = &'a Field>,
{
    let mut len = None;
    for field in fields {
        if let Field::Array(values) = field {
            match len {
                None => len = Some(values.len()),
                Some(expected) if expected == values.len() => {}
                Some(expected) => {
                    return Err(FieldError::ShapeMismatch {
                        left: expected,
                        right: values.len(),
                    });
                }
            }
        }
    }
    Ok(len)
}
