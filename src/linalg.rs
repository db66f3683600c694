use crate::error::InversionError;
use ndarray::prelude::*;

/// Default magnitude below which a pivot is treated as zero
pub const DEFAULT_PIVOT_TOL: f64 = 1e-12;

/// Compute the inverse of a square matrix using Gauss-Jordan elimination with partial pivoting
///
/// # Arguments
/// * `matrix` - A square matrix to invert
/// * `pivot_tol` - Pivots with magnitude below this value mark the matrix as singular
///
/// # Returns
/// * `Ok(Array2<f64>)` - The inverted matrix
/// * `Err(InversionError)` - If the matrix is not square, singular, or the result is not finite
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use numopt::linalg::{inverse, DEFAULT_PIVOT_TOL};
///
/// let matrix = array![[4.0, 7.0], [2.0, 6.0]];
/// let inv = inverse(&matrix.view(), DEFAULT_PIVOT_TOL).unwrap();
/// assert!((inv[[0, 0]] - 0.6).abs() < 1e-12);
/// ```
pub fn inverse(matrix: &ArrayView2<f64>, pivot_tol: f64) -> Result<Array2<f64>, InversionError> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(InversionError::NotSquare(format!(
            "Matrix dimensions are {}x{}, expected square matrix",
            rows, cols
        )));
    }

    let n = rows;

    // Augmented matrix [A | I]
    let mut augmented = Array2::<f64>::zeros((n, 2 * n));
    augmented.slice_mut(s![.., ..n]).assign(matrix);
    for i in 0..n {
        augmented[[i, i + n]] = 1.0;
    }

    for i in 0..n {
        let mut pivot_row = i;
        let mut max_abs = augmented[[i, i]].abs();
        for k in (i + 1)..n {
            let abs_val = augmented[[k, i]].abs();
            if abs_val > max_abs {
                max_abs = abs_val;
                pivot_row = k;
            }
        }

        // Negated comparison so a NaN pivot is rejected as well
        if !(max_abs >= pivot_tol) {
            return Err(InversionError::Singular(format!(
                "Matrix is singular or nearly singular at pivot {} (|pivot| = {:e})",
                i, max_abs
            )));
        }

        if pivot_row != i {
            for j in 0..(2 * n) {
                augmented.swap([i, j], [pivot_row, j]);
            }
        }

        let pivot = augmented[[i, i]];
        augmented.row_mut(i).mapv_inplace(|v| v / pivot);

        let pivot_vals = augmented.row(i).to_owned();
        for k in 0..n {
            if k != i {
                let factor = augmented[[k, i]];
                if factor != 0.0 {
                    augmented.row_mut(k).scaled_add(-factor, &pivot_vals);
                }
            }
        }
    }

    let inverse = augmented.slice(s![.., n..]).to_owned();
    if inverse.iter().any(|v| !v.is_finite()) {
        return Err(InversionError::Singular(
            "Inverse contains non-finite entries".to_string(),
        ));
    }

    Ok(inverse)
}

/// p-norm of a vector; `p = f64::INFINITY` gives the max norm
pub fn p_norm(v: &ArrayView1<f64>, p: f64) -> f64 {
    if p.is_infinite() {
        v.iter().fold(0.0, |acc: f64, &x| acc.max(x.abs()))
    } else if p == 1.0 {
        v.iter().map(|x| x.abs()).sum()
    } else if p == 2.0 {
        v.iter().map(|x| x * x).sum::<f64>().sqrt()
    } else {
        v.iter().map(|x| x.abs().powf(p)).sum::<f64>().powf(1.0 / p)
    }
}
