//! Barrier-method SDP engine for affine LMI families.
//!
//! Solves semidefinite programs in inequality form
//!
//! ```text
//! minimize    cᵀ y
//! subject to  F_k(y) = A_k0 + Σ_i y_i A_ki ⪰ 0,   k = 1..K
//! ```
//!
//! where every block is given as an [`AffineFamily`] of sparse symmetric
//! matrices.
//!
//! # Algorithm
//!
//! A primal barrier method on `Φ(y) = -Σ_k log det F_k(y)`:
//!
//! - **Analytic centre** by damped Newton steps from a strictly feasible start
//! - **Path following** on `t cᵀy + Φ(y)` with the path parameter increased by
//!   `γ/‖c‖*` per step, either with damped re-centring
//!   ([`Algorithm::DampedNewton`]) or single full Newton steps
//!   ([`Algorithm::ShortStep`])
//! - **Ranks** of every block at the solution, from a symmetric eigen-decomposition
//!
//! # Example
//!
//! ```ignore
//! use solver_sdp::{AffineFamily, Algorithm, SdpProblem, SdpSettings, SdpSolver};
//!
//! // min y  s.t.  [1 - y] ⪰ 0, [1 + y] ⪰ 0   (i.e. -1 <= y <= 1)
//! let upper = AffineFamily::from_entries(2, 1, vec![(0, 0, 0, 1.0), (1, 0, 0, -1.0)]);
//! let lower = AffineFamily::from_entries(2, 1, vec![(0, 0, 0, 1.0), (1, 0, 0, 1.0)]);
//! let prob = SdpProblem::new(vec![1.0], vec![upper, lower]);
//!
//! let mut solver = SdpSolver::new(prob, SdpSettings::default())?;
//! let y = solver.solve(&[0.0], Algorithm::DampedNewton)?;
//! assert!((y[0] + 1.0).abs() < 1e-6);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ipm;
pub mod linalg;
pub mod lmi;
pub mod problem;

// Re-export main types
pub use error::{SdpError, SdpResult};
pub use ipm::SdpSolver;
pub use problem::{AffineFamily, Algorithm, SdpProblem, SdpSettings, SolveInfo, SolveStatus};

/// One-shot solve entry point.
///
/// Validates the problem, solves it from `start` and returns the optimal `y`.
pub fn solve(
    problem: SdpProblem,
    start: &[f64],
    algorithm: Algorithm,
    settings: &SdpSettings,
) -> SdpResult<Vec<f64>> {
    let mut solver = SdpSolver::new(problem, settings.clone())?;
    solver.solve(start, algorithm)
}
