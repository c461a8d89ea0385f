use thiserror::Error;

/// Errors produced while building a B-spline basis or evaluating splines on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BasisError {
    #[error("Spline order must be at least 1, but was {0}.")]
    InvalidOrder(usize),

    #[error(
        "Knot vector size is {provided} but an order {order} basis needs at least {required} (2*order) knots."
    )]
    InsufficientKnots {
        order: usize,
        required: usize,
        provided: usize,
    },

    #[error(
        "Knot vector is not non-decreasing: t_{index}={current} is less than the previous knot {previous}."
    )]
    UnsortedKnots {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("Knot range is invalid: start ({0}) must be finite and less than or equal to end ({1}).")]
    InvalidRange(f64, f64),

    #[error(
        "Knot range has zero width but {0} internal knots were requested, which would create coincident knots."
    )]
    DegenerateRange(usize),

    #[error(
        "An order {order} knot vector with {num_internal_knots} internal knots has more knots than can be addressed."
    )]
    KnotCountOverflow {
        order: usize,
        num_internal_knots: usize,
    },

    #[error("Expected {expected} spline coefficients (one per basis function), got {found}.")]
    CoefficientCountMismatch { expected: usize, found: usize },

    #[error("Output buffer must hold exactly {expected} basis values (the order), got {found}.")]
    BufferLengthMismatch { expected: usize, found: usize },
}
