//! Saturation vapour pressure over water.
//!
//! A Goff-Gratch-style empirical fit with eight fixed coefficients. The
//! other indices use this as their humidity proxy when no humidity field is
//! supplied: the output is the saturation vapour pressure in hPa, i.e. the
//! vapour pressure a fully saturated air parcel would have at the given
//! temperature.
//!
//! The coefficients are an empirical regression and are kept bit-for-bit;
//! they are not derivable from first principles.

use crate::models::comfort::{ComfortError, evaluate};
use crate::support::field::Field;
use crate::support::units::scalar;

/// Fit coefficients `g[0..7]`, applied to powers `tk^(i-2)` for `i = 0..6`,
/// with `g[7]` weighting `ln(tk)`.
const G: [f64; 8] = [
    -2.8365744e3,
    -6.028076559e3,
    1.954263612e1,
    -2.737830188e-2,
    1.6261698e-5,
    7.0229056e-10,
    -1.8680009e-13,
    2.7150305,
];

/// Estimates saturation vapour pressure in hPa from temperature.
///
/// The input temperature must be in degrees Celsius; the conversion to an
/// absolute temperature happens inside the fit.
///
/// # Errors
///
/// Returns [`ComfortError::NumericDomain`] if any element implies a
/// non-positive absolute temperature (the fit takes a logarithm), naming the
/// offending element. Returns [`ComfortError::Field`] if called with
/// non-conforming array inputs.
pub fn saturation_vapor_pressure(t_celsius: &Field) -> Result<Field, ComfortError> {
    evaluate([t_celsius], |[t]| saturation_kernel(t))
}

/// Scalar kernel shared with the estimators that auto-derive humidity.
pub(crate) fn saturation_kernel(t_celsius: f64) -> Result<f64, ComfortError> {
    let tk = scalar::celsius_to_kelvin(t_celsius);
    if tk <= 0.0 {
        return Err(ComfortError::NumericDomain {
            context: format!("non-positive absolute temperature {tk} K in vapour-pressure fit"),
        });
    }

    let mut ess = G[7] * tk.ln();
    for (i, g) in G[..7].iter().enumerate() {
        ess += g * tk.powi(i as i32 - 2);
    }

    Ok(ess.exp() * 0.01)
}
