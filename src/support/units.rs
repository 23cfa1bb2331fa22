//! Unit conversions.
//!
//! This module is the sole unit-normalization boundary in the crate: every
//! formula assumes its inputs are already in the unit it documents, and any
//! conversion happens here rather than being inferred inside a model.
//!
//! Conversions are provided over [`Field`] values for the public elementwise
//! API, and over plain `f64` in [`scalar`] for use inside model kernels.

use crate::support::field::Field;

/// Converts an absolute temperature field from kelvin to degrees Celsius.
#[must_use]
pub fn kelvin_to_celsius(t: &Field) -> Field {
    t.map(scalar::kelvin_to_celsius)
}

/// Converts a temperature field from degrees Celsius to kelvin.
///
/// Exact inverse of [`kelvin_to_celsius`].
#[must_use]
pub fn celsius_to_kelvin(t: &Field) -> Field {
    t.map(scalar::celsius_to_kelvin)
}

/// Divides a field by ten.
///
/// The name is historical and misleading: a true pascal-to-hectopascal
/// conversion would divide by 100. The deci-scaling here matches the
/// behavior the comfort-index formulas were fitted against and is preserved
/// exactly for compatibility with existing pipelines.
#[must_use]
pub fn pa_to_hpa(x: &Field) -> Field {
    x.map(scalar::pa_to_hpa)
}

/// Scalar counterparts used by model kernels.
pub(crate) mod scalar {
    /// Offset between the kelvin and Celsius scales.
    pub(crate) const KELVIN_OFFSET: f64 = 273.15;

    pub(crate) fn kelvin_to_celsius(t: f64) -> f64 {
        t - KELVIN_OFFSET
    }

    pub(crate) fn celsius_to_kelvin(t: f64) -> f64 {
        t + KELVIN_OFFSET
    }

    pub(crate) fn pa_to_hpa(x: f64) -> f64 {
        x / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn kelvin_celsius_round_trip() {
        for t in [-200.0, -40.0, 0.0, 36.6, 1000.0] {
            let field = Field::from(t);
            let there_and_back = kelvin_to_celsius(&celsius_to_kelvin(&field));
            match there_and_back {
                Field::Scalar(value) => assert_relative_eq!(value, t, epsilon = 1e-12),
                Field::Array(_) => panic!("scalar input must stay scalar"),
            }
        }
    }

    #[test]
    fn freezing_point() {
        assert_eq!(kelvin_to_celsius(&Field::from(273.15)), Field::Scalar(0.0));
    }

    #[test]
    fn deci_scale_applied_twice_divides_by_hundred() {
        let x = Field::from(vec![1000.0, 250.0]);
        let twice = pa_to_hpa(&pa_to_hpa(&x));
        assert_eq!(twice, Field::from(vec![10.0, 2.5]));
    }

    #[test]
    fn conversions_are_elementwise() {
        let t = Field::from(vec![273.15, 293.15]);
        assert_eq!(kelvin_to_celsius(&t), Field::from(vec![0.0, 20.0]));
    }
}
