//! Supporting utilities used by models.

pub mod field;
pub mod units;
