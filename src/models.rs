//! Public comfort-index models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Currently the only
//! domain is [`comfort`], which holds the thermal-comfort index estimators.
//!
//! # Model structure
//!
//! Each estimator is a free function over [`Field`](crate::support::field::Field)
//! values: fields in, field out, no retained state. The elementwise scalar
//! kernel of each estimator is an implementation detail and is **not** part
//! of the public API.

pub mod comfort;
