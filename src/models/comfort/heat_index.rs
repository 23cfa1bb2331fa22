//! Heat index.
//!
//! A Rothfusz-style quadratic cross-term polynomial combining temperature
//! and the deci-scaled vapour-pressure humidity term.

use tracing::debug;

use crate::models::comfort::{ComfortError, evaluate, saturation_vapor_pressure};
use crate::support::field::Field;
use crate::support::units::{self, scalar};

/// Polynomial coefficients, applied with the fixed sign pattern below.
const HI: [f64; 8] = [
    8.784695,
    1.61139411,
    2.338549,
    0.14611605,
    1.2308094e-2,
    2.211732e-3,
    7.2546e-4,
    3.58e-6,
];

/// Estimates the heat index in a Celsius-like scale.
///
/// `t_kelvin` is the 2 m air temperature in kelvin. When `rh` is absent,
/// the saturation vapour pressure at the air temperature is used instead;
/// either way the humidity term is deci-scaled before entering the
/// polynomial.
///
/// # Errors
///
/// Returns [`ComfortError::NumericDomain`] if humidity derivation fails on
/// an element with no real result, and [`ComfortError::Field`] if the
/// inputs do not conform to a common shape.
pub fn heat_index(t_kelvin: &Field, rh: Option<&Field>) -> Result<Field, ComfortError> {
    let t_c = units::kelvin_to_celsius(t_kelvin);

    let rh = match rh {
        Some(rh) => rh.clone(),
        None => {
            debug!("no humidity input; deriving saturation vapour pressure from temperature");
            saturation_vapor_pressure(&t_c)?
        }
    };

    evaluate([&t_c, &rh], |[t, rh]| {
        let rh = scalar::pa_to_hpa(rh);
        Ok(-HI[0] + HI[1] * t + HI[2] * rh
            - HI[3] * t * rh
            - HI[4] * rh * rh
            + HI[5] * t * t * rh
            + HI[6] * t * rh * rh
            - HI[7] * t * t * rh * rh)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn warm_humid_reference_value() {
        // 30°C with a 50 hPa humidity term (5.0 after the deci-scale).
        let hi = heat_index(&Field::from(303.15), Some(&Field::from(50.0))).unwrap();
        let Field::Scalar(value) = hi else {
            panic!("scalar inputs must stay scalar");
        };
        assert_relative_eq!(value, 39.44110245, epsilon = 1e-8);
    }

    #[test]
    fn humidity_derivation_matches_explicit_saturation() {
        let t = Field::from(vec![300.15, 305.15]);
        let t_c = units::kelvin_to_celsius(&t);
        let saturated = saturation_vapor_pressure(&t_c).unwrap();

        let derived = heat_index(&t, None).unwrap();
        let explicit = heat_index(&t, Some(&saturated)).unwrap();
        assert_eq!(derived, explicit);
    }

    #[test]
    fn broadcasts_scalar_humidity_over_temperature_array() {
        let t = Field::from(vec![300.15, 303.15]);
        let hi = heat_index(&t, Some(&Field::from(50.0))).unwrap();
        let Field::Array(values) = hi else {
            panic!("array inputs must produce an array");
        };
        assert_eq!(values.len(), 2);
        assert_relative_eq!(values[1], 39.44110245, epsilon = 1e-8);
    }
}
