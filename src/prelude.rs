// src/prelude.rs
//! The "everything" import for matrot.
//!
//! Brings you the public types and functions with one glob:
//! ```rust
//! use matrot::prelude::*;
//! ```

// matrix transpose product
pub use crate::matrix::{multiply_by_transpose, InvalidShapeError, RowDisplay};

// string rotation
pub use crate::rotate::{normalized_shift, rotate_iterative, rotate_recursive};
