use thiserror::Error;

use crate::support::field::FieldError;

/// Errors that may occur when evaluating a comfort index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComfortError {
    /// A formula was asked for a value with no real result.
    ///
    /// For example, the logarithm of a non-positive absolute temperature in
    /// the vapour-pressure fit, or the fourth root of a negative radiant
    /// flux product. These are hard errors for the whole call; out-of-domain
    /// UTCI elements are instead masked softly with a NaN marker.
    #[error("numeric domain: {context}")]
    NumericDomain { context: String },

    /// An optional input could not be auto-derived because the fields it
    /// depends on were not supplied.
    #[error("missing input: {context}")]
    MissingInput { context: String },

    /// The input fields do not conform to a common shape.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl ComfortError {
    /// Attributes a numeric-domain error to the offending array element.
    ///
    /// Scalar paths (`index` is `None`) keep the error as-is.
    pub(crate) fn at_element(self, index: Option<usize>) -> Self {
        match (self, index) {
            (Self::NumericDomain { context }, Some(i)) => Self::NumericDomain {
                context: format!("element {i}: {context}"),
            },
            (err, _) => err,
        }
    }
}
