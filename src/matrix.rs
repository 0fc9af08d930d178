//! Classical matrix algebra: the product of a square matrix with its transpose.

use std::fmt;

use thiserror::Error;

/// The input matrix was not square.
///
/// Raised before any arithmetic takes place; the call produces no partial
/// result. Carries the first offending row so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("matrix must be square: row {row} has {found} elements, expected {expected}")]
pub struct InvalidShapeError {
    /// Index of the first row whose length differs from the row count.
    pub row: usize,
    /// That row's actual length.
    pub found: usize,
    /// Required length, equal to the number of rows N.
    pub expected: usize,
}

/// Compute A × Aᵗ for a square N×N matrix of `i32`, producing `i64`.
///
/// Element (i, j) of the product is row i of A dotted with row j of A:
/// column j of Aᵗ equals row j of A, so the transpose is never materialized.
/// Each operand is widened to `i64` before the multiply — the product of two
/// large `i32` values, or the sum of up to N such products, can exceed `i32`
/// even when every input fits.
///
/// The result is symmetric, with squared row norms on the diagonal.
pub fn multiply_by_transpose(a: &[Vec<i32>]) -> Result<Vec<Vec<i64>>, InvalidShapeError> {
    let n = a.len();
    // Squareness is checked up front: the dot product over k in 0..n is only
    // well defined when every row has exactly n elements.
    for (row, r) in a.iter().enumerate() {
        if r.len() != n {
            return Err(InvalidShapeError {
                row,
                found: r.len(),
                expected: n,
            });
        }
    }
    let mut result = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0i64;
            for k in 0..n {
                // Aᵗ element (k, j) == A[j][k]
                sum += i64::from(a[i][k]) * i64::from(a[j][k]);
            }
            result[i][j] = sum;
        }
    }
    Ok(result)
}

/// A tiny wrapper for printing a matrix row as `[a, b, c]`.
pub struct RowDisplay<'a, T>(pub &'a [T]);

impl<'a, T: fmt::Display> fmt::Display for RowDisplay<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
