//! # Comfort Models
//!
//! Thermal-comfort index models for climate and weather post-processing
//! pipelines.
//!
//! The crate is a pure numeric transformation library: given scalar or
//! array-valued meteorological fields, it returns derived comfort indices,
//! elementwise. There is no I/O, no grid handling, and no retained state;
//! every estimator is a pure function and safe to call concurrently.
//!
//! ## Crate layout
//!
//! - [`models`]: The comfort-index estimators (UTCI, mean radiant
//!   temperature, saturation vapour pressure, heat index, WBGT, humidex).
//! - [`support`]: Supporting utilities used by models, most notably the
//!   elementwise [`Field`](support::field::Field) container and the unit
//!   conversion boundary.
//!
//! ## Units
//!
//! Each estimator documents the unit it expects for every input; the
//! conversions in [`support::units`] are the only unit-normalization point
//! in the crate, and no model infers units from its data.
//!
//! ## Example
//!
//! ```
//! use comfort_models::models::comfort::utci;
//! use comfort_models::support::field::Field;
//!
//! // 20°C air, light wind, radiant temperature equal to air temperature,
//! // vapour pressure of 11.7 hPa (about 50% relative humidity).
//! let t = Field::from(293.15);
//! let va = Field::from(0.5);
//! let mrt = Field::from(20.0);
//! let rh = Field::from(11.7);
//!
//! let index = utci(&t, &va, Some(&mrt), Some(&rh), None)?;
//! assert!(matches!(index, Field::Scalar(value) if value.is_finite()));
//! # Ok::<(), comfort_models::models::comfort::ComfortError>(())
//! ```

pub mod models;
pub mod support;
