//! Moment (Lasserre) relaxation of polynomial optimization problems.
//!
//! For
//!
//! ```text
//! minimize    f(x)
//! subject to  g_i(x) >= 0,   i = 1..m,   x ∈ Rⁿ
//! ```
//!
//! the order-`d` relaxation replaces every monomial `x^α` of degree at most
//! `2d` by a moment variable `y_α` and requires the moment matrix and one
//! localizing matrix per constraint to be positive semidefinite. The result is
//! an SDP solved by [`solver_sdp`]; the first-order moments approximate the
//! minimizer, exactly so when the moment matrix has rank 1.
//!
//! # Example
//!
//! ```ignore
//! use solver_pop::{Polynomial, PopSolver};
//!
//! // min x²  s.t.  1 - x² >= 0
//! let f = Polynomial::from_terms(vec![([2], 1.0)]);
//! let g = Polynomial::from_terms(vec![([0], 1.0), ([2], -1.0)]);
//!
//! let mut pop = PopSolver::new(f, vec![g], 1)?;
//! let start = pop.feasible_point(&[[0.5], [-0.5]])?;
//! let x = pop.solve(&start)?;
//! assert!(x[0].abs() < 1e-6);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod model;
pub mod relax;
pub mod sample;
pub mod settings;
pub mod solver;

// Re-export main types
pub use error::{PopError, PopResult};
pub use model::{Monomial, Polynomial, Universe};
pub use sample::BallSampling;
pub use settings::PopSettings;
pub use solver::PopSolver;
pub use solver_sdp::{Algorithm, SdpSettings};
