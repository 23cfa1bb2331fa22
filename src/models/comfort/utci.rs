//! Universal Thermal Climate Index.
//!
//! UTCI is an equivalent temperature: the air temperature of a reference
//! environment that would provoke the same physiological response as the
//! actual combination of air temperature, wind, radiation, and humidity.
//! The operational procedure approximates the underlying
//! thermophysiological model with a 6th-order polynomial regression over a
//! bounded validity domain (Brode et al., 2012).
//!
//! # Input resolution
//!
//! The estimator accepts the humidity and radiant-temperature fields either
//! directly or by derivation: a missing humidity field is filled with the
//! saturation vapour pressure at the air temperature, and a missing mean
//! radiant temperature is computed from an explicitly supplied
//! [`RadiativeFluxes`] bundle. Asking for MRT derivation without the bundle
//! is an error; the radiative fields are never picked up implicitly.
//!
//! # Masking
//!
//! The validity gate is applied per element. Elements outside the fitted
//! domain yield `f64::NAN` as an explicit undefined marker while the rest of
//! the batch computes normally.

mod domain;
mod polynomial;

use tracing::debug;

use crate::models::comfort::{
    ComfortError, RadiativeFluxes, evaluate, mean_radiant_temperature, saturation_vapor_pressure,
};
use crate::support::field::Field;
use crate::support::units;

/// Estimates UTCI in degrees Celsius.
///
/// * `t` — 2 m air temperature, kelvin.
/// * `va` — wind speed at 10 m, m/s.
/// * `mrt` — mean radiant temperature, °C; derived from `radiation` when
///   absent.
/// * `rh` — vapour-pressure humidity term, hPa; derived as the saturation
///   vapour pressure at `t` when absent.
/// * `radiation` — radiative flux bundle, required only when `mrt` is
///   absent.
///
/// Out-of-domain elements are masked with `f64::NAN` rather than failing
/// the call; see the module docs.
///
/// # Errors
///
/// Returns [`ComfortError::MissingInput`] if `mrt` must be derived but no
/// radiation bundle was supplied, [`ComfortError::NumericDomain`] if a
/// derivation fails on an element with no real result, and
/// [`ComfortError::Field`] if the inputs do not conform to a common shape.
pub fn utci(
    t: &Field,
    va: &Field,
    mrt: Option<&Field>,
    rh: Option<&Field>,
    radiation: Option<&RadiativeFluxes>,
) -> Result<Field, ComfortError> {
    let t_c = units::kelvin_to_celsius(t);

    let rh = match rh {
        Some(rh) => rh.clone(),
        None => {
            debug!("no humidity input; deriving saturation vapour pressure from temperature");
            saturation_vapor_pressure(&t_c)?
        }
    };

    let mrt = match (mrt, radiation) {
        (Some(mrt), _) => mrt.clone(),
        (None, Some(fluxes)) => {
            debug!("no mean radiant temperature input; deriving from radiative fluxes");
            mean_radiant_temperature(&t_c, fluxes)?
        }
        (None, None) => {
            return Err(ComfortError::MissingInput {
                context: "mean radiant temperature requires either an explicit field \
                          or the radiative flux bundle"
                    .into(),
            });
        }
    };

    let result = evaluate([&t_c, va, &mrt, &rh], |[t, va, mrt, rh]| {
        let e_mrt = mrt - t;
        let rh = units::scalar::pa_to_hpa(rh);

        if !domain::contains(t, va, e_mrt, rh) {
            return Ok(f64::NAN);
        }
        Ok(polynomial::sixth_order(t, va, e_mrt, rh))
    })?;

    if let Field::Array(values) = &result {
        let masked = values.iter().filter(|v| v.is_nan()).count();
        if masked > 0 {
            debug!(masked, total = values.len(), "masked out-of-domain elements");
        }
    }

    Ok(result)
}
