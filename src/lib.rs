//! # matrot Quickstart
//!
//! ```rust
//! use matrot::prelude::*;
//!
//! // Row i of A dotted with row j of A; the transpose is never built.
//! let a = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
//! let p = multiply_by_transpose(&a).unwrap();
//! assert_eq!(p[0], vec![14, 32, 50]);
//!
//! // Both rotations agree for every (w, k).
//! assert_eq!(rotate_recursive("hola", 1), "olah");
//! assert_eq!(rotate_iterative("hola", 5), "olah");  // 5 mod 4 = 1
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod matrix;  // A × Aᵗ for square integer matrices, widened to i64
pub mod prelude;
pub mod rotate;  // left string rotation, recursive and iterative

// --- Public API exports ---

pub use matrix::{multiply_by_transpose, InvalidShapeError, RowDisplay};
pub use rotate::{normalized_shift, rotate_iterative, rotate_recursive};
