//! Error types for the SDP engine.

use thiserror::Error;

/// Errors that can occur while setting up or solving an SDP.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdpError {
    /// Problem validation failed
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    /// A vector argument has the wrong length
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The point is not strictly feasible for every block
    #[error("Point not in the interior of the feasible set")]
    NotInterior,

    /// A solved-dependent quantity was queried before `solve`
    #[error("The problem has not been solved yet")]
    NotSolved,

    /// The iteration limit was hit before convergence
    #[error("Maximum number of iterations ({0}) reached")]
    MaxIters(usize),

    /// Numerical breakdown (singular Hessian, non-finite values)
    #[error("Numerical error: {0}")]
    Numerical(String),
}

/// Result type for SDP operations.
pub type SdpResult<T> = Result<T, SdpError>;
