//! Evaluation of B-spline basis functions over a non-decreasing knot vector.
//!
//! A [`BSplineBasis`] validates its knot vector once and then returns, for any
//! parameter `t`, the index of the first basis function with support at `t`
//! together with the `order` basis values starting at that index.
//!
//! ```
//! use bspline_basis::BSplineBasis;
//!
//! let basis = BSplineBasis::from_slice(&[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0], 4)?;
//! let (index, values) = basis.eval(0.0);
//! assert_eq!(index, 0);
//! assert_eq!(values.to_vec(), vec![1.0, 0.0, 0.0, 0.0]);
//! # Ok::<(), bspline_basis::BasisError>(())
//! ```

pub mod core;

pub use crate::core::basis::BSplineBasis;
pub use crate::core::error::BasisError;
pub use crate::core::knots::{generate_uniform_knots, validate_knots};
pub use crate::core::splines::{design_matrix, evaluate_spline};
