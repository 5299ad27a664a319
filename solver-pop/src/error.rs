//! Error types for the relaxation layer.

use solver_sdp::SdpError;
use thiserror::Error;

/// Errors that can occur while building or solving a relaxation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PopError {
    /// Relaxation order below what the constraint degrees require
    #[error("The relaxation order has to be at least {minimum}.")]
    InvalidRelaxationOrder { minimum: usize },

    /// Too few sample points to build a full-rank moment matrix
    #[error("You must provide at least {required} points (got {provided}).")]
    InsufficientSamples { required: usize, provided: usize },

    /// Solution-dependent quantity queried before `solve`
    #[error("The problem has not been solved yet")]
    NotSolvedYet,

    /// Objective has no monomials or no variables
    #[error("Objective polynomial is empty or has no variables")]
    EmptyObjective,

    /// No constraint bounds the feasible set
    #[error("At least one constraint polynomial is required")]
    NoConstraints,

    /// Constraint polynomial with no terms
    #[error("Constraint {index} is empty")]
    EmptyConstraint { index: usize },

    /// A monomial with the wrong number of exponents
    #[error("Monomial arity mismatch: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// A sample point with the wrong number of coordinates
    #[error("Sample dimension mismatch: expected {expected}, found {found}")]
    SampleDimension { expected: usize, found: usize },

    /// Sampling radius must be finite and positive
    #[error("Invalid sampling radius: {0}")]
    InvalidRadius(f64),

    /// SDP engine error
    #[error("SDP solver error: {0}")]
    Sdp(#[from] SdpError),
}

/// Result type for relaxation operations.
pub type PopResult<T> = Result<T, PopError>;
