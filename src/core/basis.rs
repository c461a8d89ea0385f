//! The B-spline basis evaluator: a validated knot vector plus an order.

use ndarray::{Array1, ArrayView1};

use crate::core::error::BasisError;
use crate::core::knots::{generate_uniform_knots, locate_span, validate_knots};

/// A B-spline basis of a fixed order over a non-decreasing knot vector.
///
/// The knot vector is validated once in [`BSplineBasis::new`] and is never
/// mutated afterwards, so a basis can be shared freely between threads and
/// queried concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct BSplineBasis {
    order: usize,
    knots: Array1<f64>,
}

impl BSplineBasis {
    /// Creates a basis of order `order` (degree `order - 1`) over `knots`.
    ///
    /// # Arguments
    /// * `knots` - Non-decreasing knot vector with at least `2 * order` entries.
    ///   Repeated knots are allowed.
    /// * `order` - Order of the B-spline (m), at least 1.
    ///
    /// # Errors
    /// * [`BasisError::InvalidOrder`] if `order` is zero.
    /// * [`BasisError::InsufficientKnots`] if `knots.len() < 2 * order`.
    /// * [`BasisError::UnsortedKnots`] if a knot is smaller than its predecessor.
    pub fn new(knots: Array1<f64>, order: usize) -> Result<Self, BasisError> {
        validate_knots(knots.view(), order)?;

        let basis = Self { order, knots };
        let (lo, hi) = basis.interval();
        log::debug!(
            "Constructed order {} B-spline basis with {} knots on [{}, {}]",
            order,
            basis.knots.len(),
            lo,
            hi
        );
        Ok(basis)
    }

    /// Same as [`BSplineBasis::new`], copying the knots out of a slice.
    pub fn from_slice(knots: &[f64], order: usize) -> Result<Self, BasisError> {
        Self::new(Array1::from(knots.to_vec()), order)
    }

    /// Creates a basis over a clamped knot vector with `num_internal_knots`
    /// equally spaced interior knots on `[x_min, x_max]`.
    pub fn uniform(
        x_min: f64,
        x_max: f64,
        num_internal_knots: usize,
        order: usize,
    ) -> Result<Self, BasisError> {
        let knots = generate_uniform_knots(x_min, x_max, num_internal_knots, order)?;
        Self::new(knots, order)
    }

    /// Order of the basis (degree + 1).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Polynomial degree of each basis segment, `order - 1`.
    pub fn degree(&self) -> usize {
        self.order - 1
    }

    /// Read-only view of the knot vector as supplied at construction.
    pub fn knots(&self) -> ArrayView1<'_, f64> {
        self.knots.view()
    }

    /// Number of basis functions, which is also the number of coefficients a
    /// spline on this basis takes.
    pub fn num_basis(&self) -> usize {
        self.knots.len() - self.order
    }

    /// The closed parameter domain `[t_0, t_last]` of the basis.
    pub fn interval(&self) -> (f64, f64) {
        // len >= 2 * order >= 2, so both ends exist
        (self.knots[0], self.knots[self.knots.len() - 1])
    }

    /// Evaluates the `order` basis functions that may be nonzero at `t`.
    ///
    /// # Returns
    /// `(index, values)` where `values[k]` is the value of basis function
    /// `index + k`. The values are freshly allocated on every call and owned
    /// by the caller.
    ///
    /// Parameters outside the closed domain give an all-zero vector. At a knot
    /// of full multiplicity inside the domain the recursion divides by zero and
    /// the returned values may be NaN or infinite.
    pub fn eval(&self, t: f64) -> (usize, Array1<f64>) {
        let mut values = vec![0.0; self.order];
        let index = self.eval_in_place(t, &mut values);
        (index, Array1::from(values))
    }

    /// Evaluates the basis at `t` writing the values into `out`.
    ///
    /// `out` must hold exactly `order` values. Its previous contents are
    /// ignored. Returns the index of the first basis function, as in
    /// [`BSplineBasis::eval`].
    pub fn eval_into(&self, t: f64, out: &mut [f64]) -> Result<usize, BasisError> {
        if out.len() != self.order {
            return Err(BasisError::BufferLengthMismatch {
                expected: self.order,
                found: out.len(),
            });
        }
        Ok(self.eval_in_place(t, out))
    }

    /// Cox-de Boor triangular recursion over a single buffer of length `order`.
    ///
    /// Degree `j` values are built from degree `j - 1` values by updating the
    /// buffer from the top entry down, so every lower-degree value is read
    /// before it is overwritten.
    ///
    /// `basis` must hold exactly `order` values.
    pub(crate) fn eval_in_place(&self, t: f64, basis: &mut [f64]) -> usize {
        let order = self.order;
        let knots = &self.knots;
        let span = locate_span(knots.view(), order, t);

        let (lo, hi) = self.interval();
        if t >= lo && t <= hi {
            basis[0] = 1.0;
        } else {
            log::trace!("Parameter {} lies outside the basis domain [{}, {}]", t, lo, hi);
            basis[0] = 0.0;
        }

        let mut coefs = vec![0.0; order];
        for j in 1..order {
            // Blending weights for degree j; coefs[0] is never read
            for r in 0..=j {
                coefs[j - r] = (t - knots[span - r]) / (knots[span - r + j] - knots[span - r]);
            }

            basis[j] = coefs[j] * basis[j - 1];
            for r in (1..j).rev() {
                basis[r] = coefs[r] * basis[r - 1] + (1.0 - coefs[r + 1]) * basis[r];
            }
            basis[0] *= 1.0 - coefs[1];
        }

        span - (order - 1)
    }
}
