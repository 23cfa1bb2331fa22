//! Mean radiant temperature from radiative flux components.
//!
//! The mean radiant temperature (MRT) is the uniform temperature of a
//! surrounding enclosure that would transfer the same radiant heat to a
//! person as the actual radiative environment. It is estimated here from
//! downward/net shortwave and longwave fluxes together with solar geometry.

use crate::models::comfort::{ComfortError, evaluate};
use crate::support::field::{self, Field};
use crate::support::units::scalar;

/// Below this cosine of the solar zenith angle, the direct beam is used
/// unscaled rather than divided by `cossza`, avoiding the division blow-up
/// near sunrise and sunset. This is a defined fallback, not an error.
const ZENITH_COSINE_THRESHOLD: f64 = 0.01;

/// Radiative flux components and solar geometry consumed by the MRT
/// estimator.
///
/// All fluxes are in W/m²; the solar geometry terms are dimensionless.
/// Bundling these makes the dependency explicit wherever MRT has to be
/// auto-derived on a caller's behalf (see [`utci`](super::utci)).
#[derive(Debug, Clone, PartialEq)]
pub struct RadiativeFluxes {
    /// Surface solar radiation downwards.
    pub ssrd: Field,
    /// Surface net solar radiation.
    pub ssr: Field,
    /// Total-sky direct solar radiation at the surface.
    pub fdir: Field,
    /// Surface thermal radiation downwards.
    pub strd: Field,
    /// Surface net thermal radiation.
    pub strr: Field,
    /// Cosine of the solar zenith angle.
    pub cossza: Field,
    /// Projected-area factor of the human body.
    pub fp: Field,
}

/// Estimates mean radiant temperature in degrees Celsius.
///
/// `t` is the 2 m air temperature; the radiative formulation does not
/// consume it, mirroring the established calling contract, so it
/// participates in shape conformance only.
///
/// # Errors
///
/// Returns [`ComfortError::NumericDomain`] if the radiant flux product is
/// negative for any element (its fourth root has no real value), naming the
/// offending element. Returns [`ComfortError::Field`] if the inputs do not
/// conform to a common shape.
pub fn mean_radiant_temperature(
    t: &Field,
    fluxes: &RadiativeFluxes,
) -> Result<Field, ComfortError> {
    let RadiativeFluxes {
        ssrd,
        ssr,
        fdir,
        strd,
        strr,
        cossza,
        fp,
    } = fluxes;

    field::broadcast_len([t, ssrd, ssr, fdir, strd, strr, cossza, fp])?;

    evaluate(
        [ssrd, ssr, fdir, strd, strr, cossza, fp],
        |[ssrd, ssr, fdir, strd, strr, cossza, fp]| {
            mrt_kernel(ssrd, ssr, fdir, strd, strr, cossza, fp)
        },
    )
}

fn mrt_kernel(
    ssrd: f64,
    ssr: f64,
    fdir: f64,
    strd: f64,
    strr: f64,
    cossza: f64,
    fp: f64,
) -> Result<f64, ComfortError> {
    let dsw = ssrd - fdir;
    let rsw = ssrd - ssr;
    let lur = strd - strr;

    let fdir = if cossza > ZENITH_COSINE_THRESHOLD {
        fdir / cossza
    } else {
        fdir
    };

    let mrtcal = 17636684.3
        * (0.5 * strd + 0.5 * lur + 0.721649485)
        * (0.5 * dsw + 0.5 * rsw + fp * fdir);

    if mrtcal < 0.0 {
        return Err(ComfortError::NumericDomain {
            context: format!("negative radiant flux product {mrtcal} has no real fourth root"),
        });
    }

    Ok(scalar::kelvin_to_celsius(mrtcal.powf(0.25)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn daylight_fluxes() -> RadiativeFluxes {
        RadiativeFluxes {
            ssrd: Field::from(500.0),
            ssr: Field::from(450.0),
            fdir: Field::from(100.0),
            strd: Field::from(400.0),
            strr: Field::from(50.0),
            cossza: Field::from(0.5),
            fp: Field::from(0.3),
        }
    }

    #[test]
    fn produces_a_finite_temperature_in_daylight() {
        let t = Field::from(20.0);
        let mrt = mean_radiant_temperature(&t, &daylight_fluxes()).unwrap();
        let Field::Scalar(value) = mrt else {
            panic!("scalar inputs must stay scalar");
        };
        assert!(value.is_finite());
    }

    #[test]
    fn zenith_guard_skips_direct_beam_scaling() {
        // With no direct beam the zenith angle cannot matter, on either side
        // of the guard threshold.
        let mut low_sun = daylight_fluxes();
        low_sun.fdir = Field::from(0.0);
        low_sun.cossza = Field::from(0.005);

        let mut high_sun = low_sun.clone();
        high_sun.cossza = Field::from(0.9);

        let t = Field::from(20.0);
        let a = mean_radiant_temperature(&t, &low_sun).unwrap();
        let b = mean_radiant_temperature(&t, &high_sun).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn direct_beam_is_scaled_above_the_threshold() {
        let unscaled = daylight_fluxes();
        let mut scaled = unscaled.clone();
        scaled.cossza = Field::from(0.25);

        let t = Field::from(20.0);
        let (Field::Scalar(a), Field::Scalar(b)) = (
            mean_radiant_temperature(&t, &unscaled).unwrap(),
            mean_radiant_temperature(&t, &scaled).unwrap(),
        ) else {
            panic!("scalar inputs must stay scalar");
        };
        // Halving cossza doubles the effective direct beam, raising MRT.
        assert!(b > a);
    }

    #[test]
    fn negative_flux_product_is_a_numeric_domain_error() {
        let mut fluxes = daylight_fluxes();
        fluxes.strd = Field::from(-400.0);
        fluxes.strr = Field::from(0.0);

        let result = mean_radiant_temperature(&Field::from(20.0), &fluxes);
        assert!(matches!(result, Err(ComfortError::NumericDomain { .. })));
    }

    #[test]
    fn temperature_shape_must_conform() {
        let mut fluxes = daylight_fluxes();
        fluxes.ssrd = Field::from(vec![500.0, 500.0]);

        let t = Field::from(vec![20.0, 21.0, 22.0]);
        assert!(matches!(
            mean_radiant_temperature(&t, &fluxes),
            Err(ComfortError::Field(_))
        ));
    }

    #[test]
    fn broadcasts_scalar_geometry_over_flux_arrays() {
        let mut fluxes = daylight_fluxes();
        fluxes.ssrd = Field::from(vec![500.0, 600.0]);

        let mrt = mean_radiant_temperature(&Field::from(20.0), &fluxes).unwrap();
        let Field::Array(values) = mrt else {
            panic!("array inputs must produce an array");
        };
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| v.is_finite()));

        // More incoming shortwave radiation means a warmer radiant field.
        assert!(values[1] > values[0]);

        // Each element matches its standalone scalar evaluation exactly.
        let mut single = daylight_fluxes();
        single.ssrd = Field::from(600.0);
        let standalone = mean_radiant_temperature(&Field::from(20.0), &single).unwrap();
        let Field::Scalar(expected) = standalone else {
            panic!("scalar inputs must stay scalar");
        };
        assert_relative_eq!(values[1], expected);
    }
}
