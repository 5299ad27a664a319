//! Problem data structures and validation.
//!
//! This module defines the linear-matrix-inequality problem representation
//! consumed by the engine and all associated types.

use crate::error::{SdpError, SdpResult};
use crate::linalg::{self, SparseCsc};
use nalgebra::DMatrix;
use std::fmt;

/// Affine family of symmetric matrices.
///
/// Represents the map
///
/// ```text
/// F(y) = F[0] + Σ_{v ≥ 1} y_v F[v]
/// ```
///
/// where `y` has `len() - 1` entries. The constant index 0 carries the
/// constant part of the matrix, all other indices its linear part.
#[derive(Debug, Clone)]
pub struct AffineFamily {
    dim: usize,
    matrices: Vec<SparseCsc>,
}

impl AffineFamily {
    /// Wrap already assembled matrices. All must be `dim × dim`.
    pub fn new(dim: usize, matrices: Vec<SparseCsc>) -> Self {
        Self { dim, matrices }
    }

    /// Build a family of `len` matrices of size `dim × dim` from
    /// `(index, row, col, value)` quadruplets. Duplicates are summed.
    pub fn from_entries<I>(len: usize, dim: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, usize, f64)>,
    {
        let mut triplets: Vec<Vec<(usize, usize, f64)>> = vec![Vec::new(); len];
        for (pos, i, j, v) in entries {
            triplets[pos].push((i, j, v));
        }
        let matrices = triplets
            .into_iter()
            .map(|t| linalg::from_triplets(dim, t))
            .collect();
        Self::new(dim, matrices)
    }

    /// Number of matrices (moment indices, constant included).
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Row/column dimension shared by every matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn matrix(&self, pos: usize) -> &SparseCsc {
        &self.matrices[pos]
    }

    pub fn matrices(&self) -> &[SparseCsc] {
        &self.matrices
    }

    /// Entry `(i, j)` of matrix `pos`.
    pub fn entry(&self, pos: usize, i: usize, j: usize) -> f64 {
        linalg::entry(&self.matrices[pos], i, j)
    }

    /// Dense copy of matrix `pos`.
    pub fn dense(&self, pos: usize) -> DMatrix<f64> {
        linalg::to_dense(&self.matrices[pos])
    }

    /// Total number of stored nonzeros.
    pub fn nnz(&self) -> usize {
        self.matrices.iter().map(|m| m.nnz()).sum()
    }

    /// Evaluate `F(y)` with the implicit `y_0 = 1`.
    pub fn evaluate(&self, y: &[f64]) -> DMatrix<f64> {
        assert_eq!(y.len() + 1, self.len());
        let mut out = DMatrix::<f64>::zeros(self.dim, self.dim);
        linalg::add_scaled(&mut out, &self.matrices[0], 1.0);
        for (a, &yv) in self.matrices[1..].iter().zip(y) {
            linalg::add_scaled(&mut out, a, yv);
        }
        out
    }
}

/// SDP in inequality (dual) form.
///
/// ```text
/// minimize    cᵀ y
/// subject to  F_k(y) ⪰ 0    for every block k
/// ```
///
/// Every block is an [`AffineFamily`] with `c.len() + 1` matrices.
#[derive(Debug, Clone)]
pub struct SdpProblem {
    /// Linear cost vector c
    pub c: Vec<f64>,

    /// LMI blocks
    pub blocks: Vec<AffineFamily>,
}

impl SdpProblem {
    pub fn new(c: Vec<f64>, blocks: Vec<AffineFamily>) -> Self {
        Self { c, blocks }
    }

    /// Number of free variables y
    pub fn num_vars(&self) -> usize {
        self.c.len()
    }

    /// Barrier degree ν (sum of block dimensions)
    pub fn barrier_degree(&self) -> usize {
        self.blocks.iter().map(|b| b.dim()).sum()
    }

    /// Validate dimensions and symmetry of every block
    pub fn validate(&self) -> SdpResult<()> {
        let m = self.num_vars();

        if self.blocks.is_empty() {
            return Err(SdpError::InvalidProblem(
                "problem must have at least one LMI block".to_string(),
            ));
        }

        if self.c.iter().any(|v| !v.is_finite()) {
            return Err(SdpError::InvalidProblem(
                "objective vector contains non-finite values".to_string(),
            ));
        }

        for (k, block) in self.blocks.iter().enumerate() {
            if block.len() != m + 1 {
                return Err(SdpError::InvalidProblem(format!(
                    "block {} has {} matrices, expected {}",
                    k,
                    block.len(),
                    m + 1
                )));
            }
            if block.dim() == 0 {
                return Err(SdpError::InvalidProblem(format!(
                    "block {} has zero dimension",
                    k
                )));
            }
            for (pos, a) in block.matrices().iter().enumerate() {
                if a.rows() != block.dim() || a.cols() != block.dim() {
                    return Err(SdpError::InvalidProblem(format!(
                        "block {} matrix {} has shape {}×{}, expected {}×{}",
                        k,
                        pos,
                        a.rows(),
                        a.cols(),
                        block.dim(),
                        block.dim()
                    )));
                }
                if !linalg::is_symmetric(a, 1e-12) {
                    return Err(SdpError::InvalidProblem(format!(
                        "block {} matrix {} is not symmetric",
                        k, pos
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Path-following variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Newton steps damped by 1/(1+λ); always stays inside the domain.
    #[default]
    DampedNewton,

    /// Full Newton steps along the central path with a backtracking guard.
    ShortStep,
}

/// Solver settings and parameters.
#[derive(Debug, Clone)]
pub struct SdpSettings {
    /// Maximum number of iterations per phase
    pub max_iter: usize,

    /// Target accuracy of the objective value
    pub eps: f64,

    /// Centring threshold on the Newton decrement
    pub beta: f64,

    /// Path parameter increment factor
    pub gamma: f64,

    /// Relative eigenvalue threshold used by `ranks`
    pub rank_tol: f64,

    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for SdpSettings {
    fn default() -> Self {
        let max_iter = std::env::var("SDP_MAX_ITER")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(5000);
        let eps = std::env::var("SDP_EPS")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(1e-8);

        // β = 1/9 and γ = √β/(1+√β) - β keep full Newton steps inside the
        // region of quadratic convergence.
        let beta: f64 = 1.0 / 9.0;
        let gamma = beta.sqrt() / (1.0 + beta.sqrt()) - beta;

        Self {
            max_iter,
            eps,
            beta,
            gamma,
            rank_tol: 1e-6,
            verbose: false,
        }
    }
}

impl SdpSettings {
    /// Set target accuracy.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set iteration limit.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }
}

/// Solution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Optimal solution found to the requested accuracy
    Optimal,

    /// Zero objective: the analytic centre is returned
    AnalyticCenter,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::AnalyticCenter => write!(f, "Analytic Center"),
        }
    }
}

/// Detailed solve information.
#[derive(Debug, Clone)]
pub struct SolveInfo {
    /// Solution status
    pub status: SolveStatus,

    /// Damped Newton iterations spent locating the analytic centre
    pub center_iters: usize,

    /// Path-following iterations
    pub path_iters: usize,

    /// Final path parameter t
    pub t: f64,

    /// Objective value cᵀy at the returned point
    pub obj_val: f64,
}
