//! B-spline basis construction and evaluation.

pub mod basis;
pub mod error;
pub mod knots;
pub mod splines;
