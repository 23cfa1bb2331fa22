//! Thermal-comfort indices derived from meteorological fields.
//!
//! This module contains the estimators used by climate and weather
//! post-processing pipelines to turn basic meteorological fields into
//! human-comfort indices:
//!
//! - [`saturation_vapor_pressure`]: Goff-Gratch-style saturation vapour
//!   pressure, the humidity proxy the other indices fall back on.
//! - [`mean_radiant_temperature`]: radiant temperature from shortwave and
//!   longwave flux components and solar geometry.
//! - [`utci`]: the Universal Thermal Climate Index, a 6th-order polynomial
//!   regression over temperature, wind, radiant excess, and humidity.
//! - [`heat_index`], [`wbgt_simple`], [`humidex`]: single-formula indices.
//!
//! Every estimator is a pure function of fully-resolved inputs: optional
//! inputs are derived once, up front, and the elementwise computation then
//! runs over immutable fields. There is no shared state, so all estimators
//! are safe to call from any number of threads.

mod error;
mod heat_index;
mod humidex;
mod mrt;
mod utci;
mod vapor_pressure;
mod wbgt;

pub use error::ComfortError;
pub use heat_index::heat_index;
pub use humidex::humidex;
pub use mrt::{RadiativeFluxes, mean_radiant_temperature};
pub use utci::utci;
pub use vapor_pressure::saturation_vapor_pressure;
pub use wbgt::wbgt_simple;

use crate::support::field::{self, Field};

/// Evaluates a scalar kernel elementwise over a set of conformed fields.
///
/// All estimators funnel through this helper so that broadcasting,
/// per-element error attribution, and scalar/array collection behave
/// identically everywhere. Each element is computed independently, so the
/// result for an in-domain element is bit-identical whether it is evaluated
/// alone or as part of a batch.
pub(crate) fn evaluate<const N: usize>(
    fields: [&Field; N],
    kernel: impl Fn([f64; N]) -> Result<f64, ComfortError>,
) -> Result<Field, ComfortError> {
    let len = field::broadcast_len(fields)?;
    let count = len.unwrap_or(1);

    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let args = fields.map(|f| f.get(i));
        let value = kernel(args).map_err(|err| err.at_element(len.map(|_| i)))?;
        values.push(value);
    }

    Ok(Field::from_parts(len, values))
}
