use ndarray::{s, Array2, ArrayView1};

use crate::core::basis::BSplineBasis;
use crate::core::error::BasisError;

/// Evaluates the spline `s(t) = sum_j a_j B_j(t)` on `basis`.
///
/// # Arguments
/// * `basis` - The B-spline basis.
/// * `coefficients` - B-spline coefficients (a_j), one per basis function.
/// * `t` - Evaluation point.
///
/// # Returns
/// The spline value, or `0.0` when `t` is outside the basis domain.
pub fn evaluate_spline(
    basis: &BSplineBasis,
    coefficients: ArrayView1<'_, f64>,
    t: f64,
) -> Result<f64, BasisError> {
    if coefficients.len() != basis.num_basis() {
        return Err(BasisError::CoefficientCountMismatch {
            expected: basis.num_basis(),
            found: coefficients.len(),
        });
    }

    let (index, values) = basis.eval(t);
    let active = coefficients.slice(s![index..index + basis.order()]);
    Ok(active.dot(&values))
}

/// Builds the dense collocation matrix of `basis` at `points`.
///
/// Row `p` holds `B_j(points[p])` for every basis function `j`; at most
/// `order` entries per row are nonzero.
pub fn design_matrix(basis: &BSplineBasis, points: ArrayView1<'_, f64>) -> Array2<f64> {
    let order = basis.order();
    let mut matrix = Array2::zeros((points.len(), basis.num_basis()));
    let mut values = vec![0.0; order];

    for (mut row, &x) in matrix.rows_mut().into_iter().zip(points.iter()) {
        let index = basis.eval_in_place(x, &mut values);
        for (k, &v) in values.iter().enumerate() {
            row[index + k] = v;
        }
    }

    matrix
}
