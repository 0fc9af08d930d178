//! Tests for the transpose-product routine.
//!
//! Covers:
//! - the concrete 3×3 case from the demo
//! - symmetry and squared-row-norm diagonal on random square matrices
//! - eager shape validation on ragged input
//! - i32→i64 widening near the i32 range

use matrot::matrix::{multiply_by_transpose, InvalidShapeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn concrete_3x3() {
    let a = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    let p = multiply_by_transpose(&a).unwrap();
    assert_eq!(
        p,
        vec![
            vec![14, 32, 50],
            vec![32, 77, 122],
            vec![50, 122, 194],
        ]
    );
}

#[test]
fn empty_matrix() {
    // 0×0 is square; the product is empty
    let a: Vec<Vec<i32>> = vec![];
    assert_eq!(multiply_by_transpose(&a).unwrap(), Vec::<Vec<i64>>::new());
}

#[test]
fn single_element() {
    // 1×1: the product is the square of the lone element
    let p = multiply_by_transpose(&[vec![-7]]).unwrap();
    assert_eq!(p, vec![vec![49]]);
}

#[test]
fn ragged_input_rejected() {
    // row lengths [3, 3, 2]
    let a = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]];
    let err = multiply_by_transpose(&a).unwrap_err();
    assert_eq!(
        err,
        InvalidShapeError {
            row: 2,
            found: 2,
            expected: 3
        }
    );
}

#[test]
fn wrong_row_count_rejected() {
    // 2 rows of 3 elements is not square either
    let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let err = multiply_by_transpose(&a).unwrap_err();
    assert_eq!(err.row, 0);
    assert_eq!(err.found, 3);
    assert_eq!(err.expected, 2);
}

#[test]
fn error_message_names_the_row() {
    let err = multiply_by_transpose(&[vec![1, 2], vec![3]]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "matrix must be square: row 1 has 1 elements, expected 2"
    );
}

#[test]
fn widening_avoids_i32_overflow() {
    // i32::MAX² needs ~62 bits; the sum of two of them needs one more
    let m = i32::MAX;
    let p = multiply_by_transpose(&[vec![m]]).unwrap();
    assert_eq!(p[0][0], (m as i64) * (m as i64));

    let p = multiply_by_transpose(&[vec![m, m], vec![m, m]]).unwrap();
    assert_eq!(p[0][0], 2 * (m as i64) * (m as i64));
    assert_eq!(p, vec![vec![p[0][0]; 2]; 2]);
}

#[test]
fn symmetric_with_squared_row_norms_on_diagonal() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 0..=8 {
        let a: Vec<Vec<i32>> = (0..n)
            .map(|_| (0..n).map(|_| rng.gen_range(-1000..=1000)).collect())
            .collect();
        let p = multiply_by_transpose(&a).unwrap();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(p[i][j], p[j][i], "asymmetry at ({}, {})", i, j);
            }
            let norm_sq: i64 = a[i].iter().map(|&x| i64::from(x) * i64::from(x)).sum();
            assert_eq!(p[i][i], norm_sq);
            assert!(p[i][i] >= 0);
        }
    }
}
