//! Validity domain of the UTCI polynomial approximation.
//!
//! The regression is only accurate over a bounded region of its four input
//! variables. The gate is evaluated per element: elements outside the domain
//! are masked with a NaN marker while the rest of the batch still computes.

use std::ops::RangeInclusive;

/// Air temperature bounds, °C.
pub(super) const AIR_TEMPERATURE: RangeInclusive<f64> = -50.0..=50.0;

/// Wind speed bounds, m/s.
pub(super) const WIND_SPEED: RangeInclusive<f64> = 0.0..=17.0;

/// Upper bound on the deci-scaled vapour pressure term. There is no lower
/// bound in the fitted domain.
pub(super) const VAPOUR_PRESSURE_MAX: f64 = 5.0;

/// Bounds on the radiant excess `mrt - t`, °C.
pub(super) const MRT_EXCESS: RangeInclusive<f64> = -30.0..=70.0;

/// Returns `true` if one element's inputs are inside the fitted domain.
///
/// NaN inputs fail every bound and are therefore masked rather than
/// propagated into the polynomial.
pub(super) fn contains(t: f64, va: f64, e_mrt: f64, rh: f64) -> bool {
    AIR_TEMPERATURE.contains(&t)
        && WIND_SPEED.contains(&va)
        && rh <= VAPOUR_PRESSURE_MAX
        && MRT_EXCESS.contains(&e_mrt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_point_is_inside() {
        assert!(contains(20.0, 0.5, 0.0, 5.0));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(contains(-50.0, 0.0, -30.0, 5.0));
        assert!(contains(50.0, 17.0, 70.0, 5.0));
    }

    #[test]
    fn each_bound_excludes() {
        assert!(!contains(50.001, 0.5, 0.0, 1.0));
        assert!(!contains(20.0, 17.0001, 0.0, 1.0));
        assert!(!contains(20.0, -0.001, 0.0, 1.0));
        assert!(!contains(20.0, 0.5, 70.5, 1.0));
        assert!(!contains(20.0, 0.5, 0.0, 5.1));
    }

    #[test]
    fn nan_inputs_are_outside() {
        assert!(!contains(f64::NAN, 0.5, 0.0, 1.0));
        assert!(!contains(20.0, 0.5, f64::NAN, 1.0));
    }
}
