#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Null-space extraction through the singular value decomposition.
pub mod null_space;

pub use null_space::{solve_null_space, NullSpace, NullSpaceParams};

use thiserror::Error;

/// Dynamically-sized, owned, double precision matrix.
pub type DMatF64 = faer::Mat<f64>;

/// Error types for the linear algebra routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// The matrix shape cannot carry a one-dimensional null space.
    #[error("Matrix of shape {rows}x{cols} has no well-defined null space")]
    InvalidShape {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// The input or the decomposition contains NaN or infinite values.
    #[error("Matrix contains non-finite values")]
    NonFinite,

    /// All singular values are zero.
    #[error("Matrix is identically zero")]
    ZeroMatrix,

    /// The two smallest singular values are not well separated.
    #[error("Null space is not one-dimensional: relative singular gap {gap:e} is below {threshold:e}")]
    RankDeficient {
        /// Relative gap between the two smallest singular values.
        gap: f64,
        /// Minimum gap that was required.
        threshold: f64,
    },
}
