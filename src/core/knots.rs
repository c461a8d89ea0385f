use ndarray::{Array1, ArrayView1};

use crate::core::error::BasisError;

/// Generates a clamped knot vector with uniformly spaced interior knots.
///
/// # Arguments
/// * `x_min` - Minimum value of the range.
/// * `x_max` - Maximum value of the range.
/// * `num_internal_knots` - Number of knots to place between the boundaries.
/// * `order` - Order of the B-spline (m).
///
/// # Returns
/// `order` copies of `x_min`, the interior knots, then `order` copies of `x_max`.
pub fn generate_uniform_knots(
    x_min: f64,
    x_max: f64,
    num_internal_knots: usize,
    order: usize,
) -> Result<Array1<f64>, BasisError> {
    if order == 0 {
        return Err(BasisError::InvalidOrder(order));
    }
    if !x_min.is_finite() || !x_max.is_finite() || x_min > x_max {
        return Err(BasisError::InvalidRange(x_min, x_max));
    }
    // x_min == x_max is allowed only without interior knots
    if x_min == x_max && num_internal_knots > 0 {
        return Err(BasisError::DegenerateRange(num_internal_knots));
    }

    let total = order
        .checked_mul(2)
        .and_then(|boundary| boundary.checked_add(num_internal_knots))
        .ok_or(BasisError::KnotCountOverflow {
            order,
            num_internal_knots,
        })?;

    let mut knots_vec = Vec::with_capacity(total);
    knots_vec.extend(std::iter::repeat(x_min).take(order));

    let step = (x_max - x_min) / (num_internal_knots + 1) as f64;
    knots_vec.extend((1..=num_internal_knots).map(|i| x_min + i as f64 * step));

    knots_vec.extend(std::iter::repeat(x_max).take(order));

    log::debug!(
        "Generated {} uniform knots on [{}, {}] for order {}",
        knots_vec.len(),
        x_min,
        x_max,
        order
    );

    Ok(Array1::from(knots_vec))
}

/// Validates a knot vector for a basis of the given order.
///
/// A valid knot vector holds at least `2 * order` knots in non-decreasing
/// order. Repeated knots are allowed.
pub fn validate_knots(knots: ArrayView1<'_, f64>, order: usize) -> Result<(), BasisError> {
    if order == 0 {
        return Err(BasisError::InvalidOrder(order));
    }

    // Saturates so an oversized order always fails the length check
    let required = order.saturating_mul(2);
    if knots.len() < required {
        return Err(BasisError::InsufficientKnots {
            order,
            required,
            provided: knots.len(),
        });
    }

    for i in 1..knots.len() {
        if knots[i] < knots[i - 1] {
            return Err(BasisError::UnsortedKnots {
                index: i,
                previous: knots[i - 1],
                current: knots[i],
            });
        }
    }

    Ok(())
}

/// Locates the knot span used to evaluate the basis at `t`.
///
/// Only the interior knots `order..knots.len() - order` are scanned. The
/// returned index `i` is the last interior knot strictly below `t`, or the
/// first interior knot equal to `t`, and is never smaller than `order - 1`.
///
/// The knot vector must already satisfy [`validate_knots`].
pub(crate) fn locate_span(knots: ArrayView1<'_, f64>, order: usize, t: f64) -> usize {
    let mut span = order - 1;
    let stop = knots.len() - order;

    for k in order..stop {
        if t == knots[k] {
            // An exact hit wins over any later knot
            span = k;
            break;
        }
        if t > knots[k] {
            span = k;
        }
    }

    span
}
