//! Log-det barrier of a set of LMI blocks.
//!
//! For blocks `F_k(y) = A_k0 + Σ y_i A_ki` the barrier is
//!
//! ```text
//! Φ(y) = -Σ_k log det F_k(y)
//! ∇Φ_i  = -Σ_k tr(F_k⁻¹ A_ki)
//! ∇²Φ_ij = Σ_k tr(F_k⁻¹ A_ki F_k⁻¹ A_kj)
//! ```
//!
//! Interior membership is decided by a Cholesky factorization of every block.

use crate::error::{SdpError, SdpResult};
use crate::linalg;
use crate::problem::AffineFamily;
use nalgebra::linalg::{Cholesky, SymmetricEigen};
use nalgebra::{DMatrix, DVector};

/// Gradient and Hessian of the barrier at one point.
#[derive(Debug, Clone)]
pub struct BarrierDerivatives {
    pub grad: DVector<f64>,
    pub hess: DMatrix<f64>,
}

/// Barrier over every block of a problem.
#[derive(Debug, Clone)]
pub struct LmiBarrier<'a> {
    blocks: &'a [AffineFamily],
    num_vars: usize,
}

impl<'a> LmiBarrier<'a> {
    pub fn new(blocks: &'a [AffineFamily], num_vars: usize) -> Self {
        Self { blocks, num_vars }
    }

    /// Barrier degree ν.
    pub fn degree(&self) -> usize {
        self.blocks.iter().map(|b| b.dim()).sum()
    }

    /// True if every block is positive definite at y.
    pub fn is_interior(&self, y: &[f64]) -> bool {
        if y.iter().any(|v| !v.is_finite()) {
            return false;
        }
        self.blocks
            .iter()
            .all(|b| Cholesky::new(b.evaluate(y)).is_some())
    }

    /// Φ(y), +∞ outside the interior.
    pub fn value(&self, y: &[f64]) -> f64 {
        let mut acc = 0.0;
        for block in self.blocks {
            let Some(chol) = Cholesky::new(block.evaluate(y)) else {
                return f64::INFINITY;
            };
            // log det X = 2 Σ log L_ii
            acc -= 2.0 * chol.l_dirty().diagonal().iter().map(|v| v.ln()).sum::<f64>();
        }
        acc
    }

    /// Gradient and Hessian at an interior point.
    pub fn derivatives(&self, y: &[f64]) -> SdpResult<BarrierDerivatives> {
        let m = self.num_vars;
        if y.len() != m {
            return Err(SdpError::DimensionMismatch {
                expected: m,
                actual: y.len(),
            });
        }
        let mut grad = DVector::<f64>::zeros(m);
        let mut hess = DMatrix::<f64>::zeros(m, m);

        for block in self.blocks {
            let chol = Cholesky::new(block.evaluate(y)).ok_or(SdpError::NotInterior)?;
            let x_inv = chol.inverse();

            // W_i = X⁻¹ A_i X⁻¹, so that H_ij = tr(W_i A_j)
            for i in 0..m {
                let a_i = block.matrix(i + 1);
                if a_i.nnz() == 0 {
                    continue;
                }
                grad[i] -= linalg::trace_product(a_i, &x_inv);

                let w_i = &x_inv * linalg::sparse_dense_mul(a_i, &x_inv);
                for j in i..m {
                    let a_j = block.matrix(j + 1);
                    if a_j.nnz() == 0 {
                        continue;
                    }
                    let h = linalg::trace_product(a_j, &w_i);
                    hess[(i, j)] += h;
                    if i != j {
                        hess[(j, i)] += h;
                    }
                }
            }
        }

        if grad.iter().any(|v| !v.is_finite()) || hess.iter().any(|v| !v.is_finite()) {
            return Err(SdpError::Numerical(
                "non-finite barrier derivatives".to_string(),
            ));
        }

        Ok(BarrierDerivatives { grad, hess })
    }

    /// Numerical rank of every block at y.
    ///
    /// Counts eigenvalues above `tol * max(1, λ_max)`.
    pub fn ranks(&self, y: &[f64], tol: f64) -> Vec<usize> {
        self.blocks
            .iter()
            .map(|block| {
                let eig = SymmetricEigen::new(block.evaluate(y));
                let max_eig = eig
                    .eigenvalues
                    .iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max);
                let threshold = tol * max_eig.max(1.0);
                eig.eigenvalues.iter().filter(|&&v| v > threshold).count()
            })
            .collect()
    }
}
