use projective_linalg::LinalgError;
use thiserror::Error;

/// Errors returned by homography estimation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HomographyError {
    /// Not enough correspondences to constrain the model.
    #[error("Homography estimation requires at least {required} correspondences, got {actual}")]
    InsufficientData {
        /// Minimum number of correspondences required.
        required: usize,
        /// Number of correspondences provided.
        actual: usize,
    },

    /// The two point sets do not have the same length.
    #[error("Mismatched point set lengths: left ({left}) != right ({right})")]
    MismatchedLengths {
        /// Number of left points.
        left: usize,
        /// Number of right points.
        right: usize,
    },

    /// The point configuration cannot determine a homography.
    #[error("Degenerate configuration: {0}")]
    DegenerateConfiguration(String),

    /// The linear system has no well-separated least-squares solution.
    #[error("Solver failure: {0}")]
    SolverFailure(#[from] LinalgError),
}
