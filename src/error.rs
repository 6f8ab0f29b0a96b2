//! Error types for nnls-sweep.

use thiserror::Error;

/// Error type for nnls-sweep operations.
///
/// Only invalid inputs are errors. A solver outcome other than optimal
/// (infeasible, unbounded, iteration limit) is not an error; it is reported
/// through [`crate::SolveStatus`] on the solution record.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Input dimensions do not agree.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: String, got: String },

    /// Invalid problem specification.
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),
}

/// Result type for nnls-sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
