//! Simplified wet bulb globe temperature.
//!
//! The "simple" WBGT is an affine combination of temperature and the
//! vapour-pressure humidity term, used when the full globe-thermometer
//! measurement is unavailable.

use tracing::debug;

use crate::models::comfort::{ComfortError, evaluate, saturation_vapor_pressure};
use crate::support::field::Field;

/// Estimates the simplified wet bulb globe temperature.
///
/// `t_celsius` is the 2 m air temperature in degrees Celsius. When `rh` is
/// absent, the saturation vapour pressure at the air temperature is used.
///
/// # Errors
///
/// Returns [`ComfortError::NumericDomain`] if humidity derivation fails on
/// an element with no real result, and [`ComfortError::Field`] if the
/// inputs do not conform to a common shape.
pub fn wbgt_simple(t_celsius: &Field, rh: Option<&Field>) -> Result<Field, ComfortError> {
    let rh = match rh {
        Some(rh) => rh.clone(),
        None => {
            debug!("no humidity input; deriving saturation vapour pressure from temperature");
            saturation_vapor_pressure(t_celsius)?
        }
    };

    evaluate([t_celsius, &rh], |[t, rh]| {
        Ok(0.567 * t + 0.393 * rh + 3.94)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reference_value() {
        let wbgt = wbgt_simple(&Field::from(30.0), Some(&Field::from(50.0))).unwrap();
        let Field::Scalar(value) = wbgt else {
            panic!("scalar inputs must stay scalar");
        };
        // 0.567 * 30 + 0.393 * 50 + 3.94
        assert_relative_eq!(value, 40.6, epsilon = 1e-12);
    }

    #[test]
    fn humidity_derivation_matches_explicit_saturation() {
        let t = Field::from(vec![25.0, 30.0]);
        let saturated = saturation_vapor_pressure(&t).unwrap();

        let derived = wbgt_simple(&t, None).unwrap();
        let explicit = wbgt_simple(&t, Some(&saturated)).unwrap();
        assert_eq!(derived, explicit);
    }

    #[test]
    fn is_elementwise() {
        let t = Field::from(vec![20.0, 30.0]);
        let rh = Field::from(vec![10.0, 50.0]);
        let wbgt = wbgt_simple(&t, Some(&rh)).unwrap();
        assert_eq!(
            wbgt,
            Field::from(vec![
                0.567 * 20.0 + 0.393 * 10.0 + 3.94,
                0.567 * 30.0 + 0.393 * 50.0 + 3.94,
            ])
        );
    }
}
