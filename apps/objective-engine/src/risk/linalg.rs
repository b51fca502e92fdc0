//! Dense linear algebra kernel.
//!
//! Plain left-to-right summation without compensation. Portfolio-sized inputs
//! (tens to hundreds of assets) stay well within `f64` precision for this.

use crate::error::{ScoringError, ensure_len};

/// Multiply a square matrix by a vector.
///
/// Element `i` of the result is `Σ_j matrix[i][j] * vector[j]`. The matrix
/// must have exactly `vector.len()` rows, each of length `vector.len()`.
pub fn mat_vec_mul(matrix: &[Vec<f64>], vector: &[f64]) -> Result<Vec<f64>, ScoringError> {
    let n = vector.len();
    ensure_len("mat_vec_mul rows", n, matrix.len())?;

    matrix
        .iter()
        .map(|row| {
            ensure_len("mat_vec_mul columns", n, row.len())?;
            Ok(row.iter().zip(vector).map(|(m, v)| m * v).sum())
        })
        .collect()
}

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, ScoringError> {
    ensure_len("dot", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}
