//! Newton direction and decrement.

use crate::error::{SdpError, SdpResult};
use nalgebra::linalg::Cholesky;
use nalgebra::{DMatrix, DVector};

/// Regularization tried once when the Hessian is numerically singular.
const HESS_REG: f64 = 1e-12;

/// Factorized barrier Hessian.
pub struct HessianFactor {
    chol: Cholesky<f64, nalgebra::Dyn>,
}

impl HessianFactor {
    pub fn new(hess: &DMatrix<f64>) -> SdpResult<Self> {
        if let Some(chol) = Cholesky::new(hess.clone()) {
            return Ok(Self { chol });
        }

        let scale = hess.diagonal().iter().copied().fold(0.0_f64, f64::max).max(1.0);
        let mut reg = hess.clone();
        for i in 0..reg.nrows() {
            reg[(i, i)] += HESS_REG * scale;
        }
        Cholesky::new(reg)
            .map(|chol| Self { chol })
            .ok_or_else(|| SdpError::Numerical("barrier Hessian is not positive definite".to_string()))
    }

    /// Solve H x = rhs.
    pub fn solve(&self, rhs: &DVector<f64>) -> DVector<f64> {
        self.chol.solve(rhs)
    }

    /// Local dual norm ‖v‖* = √(vᵀ H⁻¹ v).
    pub fn dual_norm(&self, v: &DVector<f64>) -> f64 {
        v.dot(&self.solve(v)).max(0.0).sqrt()
    }
}

/// Newton direction Δ = H⁻¹ r and decrement λ = √(rᵀ Δ).
#[derive(Debug, Clone)]
pub struct NewtonStep {
    pub direction: DVector<f64>,
    pub decrement: f64,
}

impl NewtonStep {
    pub fn compute(factor: &HessianFactor, rhs: &DVector<f64>) -> SdpResult<Self> {
        let direction = factor.solve(rhs);
        let decrement = rhs.dot(&direction).max(0.0).sqrt();
        if !decrement.is_finite() {
            return Err(SdpError::Numerical("non-finite Newton decrement".to_string()));
        }
        Ok(Self {
            direction,
            decrement,
        })
    }
}
