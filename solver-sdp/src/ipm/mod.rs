//! Barrier path-following solver.
//!
//! Two phases, both driven by Newton steps on a self-concordant function:
//!
//! 1. Analytic centre: damped Newton on Φ(y) until the Newton decrement
//!    drops below β.
//! 2. Central path: minimize `t cᵀy + Φ(y)` while increasing
//!    `t ← t + γ/‖c‖*_y`, with either damped or full Newton steps.
//!
//! The method stops once `(ν + (β + √ν)β/(1-β)) / t ≤ ε`, which bounds the
//! distance of `cᵀy` from the optimal value by ε.

pub mod newton;

use crate::error::{SdpError, SdpResult};
use crate::lmi::LmiBarrier;
use crate::problem::{Algorithm, SdpProblem, SdpSettings, SolveInfo, SolveStatus};
use nalgebra::DVector;
use newton::{HessianFactor, NewtonStep};

/// Maximum number of step halvings for the short-step backtracking guard.
const MAX_BACKTRACK: usize = 60;

/// SDP solver bound to one problem.
///
/// Holds the problem data and, after a successful [`SdpSolver::solve`], the
/// optimal point.
#[derive(Debug, Clone)]
pub struct SdpSolver {
    problem: SdpProblem,
    settings: SdpSettings,
    solution: Option<Vec<f64>>,
    info: Option<SolveInfo>,
}

impl SdpSolver {
    /// Validate the problem and create a solver for it.
    pub fn new(problem: SdpProblem, settings: SdpSettings) -> SdpResult<Self> {
        problem.validate()?;
        Ok(Self {
            problem,
            settings,
            solution: None,
            info: None,
        })
    }

    pub fn problem(&self) -> &SdpProblem {
        &self.problem
    }

    pub fn settings(&self) -> &SdpSettings {
        &self.settings
    }

    /// Enables or disables iteration logging.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.settings.verbose = verbose;
    }

    /// Solution of the last successful solve.
    pub fn solution(&self) -> SdpResult<&[f64]> {
        self.solution.as_deref().ok_or(SdpError::NotSolved)
    }

    /// Diagnostics of the last successful solve.
    pub fn info(&self) -> SdpResult<&SolveInfo> {
        self.info.as_ref().ok_or(SdpError::NotSolved)
    }

    /// Numerical rank of every block at the solution.
    pub fn ranks(&self) -> SdpResult<Vec<usize>> {
        let y = self.solution()?;
        let barrier = LmiBarrier::new(&self.problem.blocks, self.problem.num_vars());
        Ok(barrier.ranks(y, self.settings.rank_tol))
    }

    /// Solve the SDP from a strictly feasible starting point.
    ///
    /// The stored solution is only replaced when the solve succeeds.
    pub fn solve(&mut self, start: &[f64], algorithm: Algorithm) -> SdpResult<Vec<f64>> {
        let m = self.problem.num_vars();
        if start.len() != m {
            return Err(SdpError::DimensionMismatch {
                expected: m,
                actual: start.len(),
            });
        }

        let barrier = LmiBarrier::new(&self.problem.blocks, m);
        if !barrier.is_interior(start) {
            return Err(SdpError::NotInterior);
        }

        let nu = barrier.degree() as f64;
        let c = DVector::from_column_slice(&self.problem.c);
        let verbose = self.settings.verbose;

        if verbose {
            log::info!(
                "SDP: {} variables, {} blocks, barrier degree {}, {:?}",
                m,
                self.problem.blocks.len(),
                nu,
                algorithm
            );
        }

        let mut y = DVector::from_column_slice(start);
        let center_iters = self.analytic_center(&barrier, &mut y)?;

        let (status, path_iters, t) = if c.iter().all(|&v| v == 0.0) {
            (SolveStatus::AnalyticCenter, 0, 0.0)
        } else {
            let (iters, t) = self.follow_path(&barrier, &c, &mut y, algorithm)?;
            (SolveStatus::Optimal, iters, t)
        };

        let obj_val = c.dot(&y);
        if verbose {
            log::info!(
                "SDP: {} after {} centring + {} path iterations, cᵀy = {:.6e}",
                status,
                center_iters,
                path_iters,
                obj_val
            );
        }

        let y: Vec<f64> = y.iter().copied().collect();
        self.solution = Some(y.clone());
        self.info = Some(SolveInfo {
            status,
            center_iters,
            path_iters,
            t,
            obj_val,
        });
        Ok(y)
    }

    /// Damped Newton on Φ until λ ≤ β. Returns the iteration count.
    fn analytic_center(&self, barrier: &LmiBarrier<'_>, y: &mut DVector<f64>) -> SdpResult<usize> {
        for iter in 0..self.settings.max_iter {
            let d = barrier.derivatives(y.as_slice())?;
            let factor = HessianFactor::new(&d.hess)?;
            let step = NewtonStep::compute(&factor, &d.grad)?;

            if self.settings.verbose {
                log::debug!("centre {:4}: λ = {:.3e}", iter, step.decrement);
            }
            if step.decrement <= self.settings.beta {
                return Ok(iter);
            }

            *y -= step.direction / (1.0 + step.decrement);
        }
        Err(SdpError::MaxIters(self.settings.max_iter))
    }

    /// Path following from an approximate analytic centre.
    /// Returns (Newton iterations, final t).
    ///
    /// The short-step variant takes one full Newton step per increase of t.
    /// The damped variant re-centres with damped steps until λ ≤ β before t
    /// is increased again.
    fn follow_path(
        &self,
        barrier: &LmiBarrier<'_>,
        c: &DVector<f64>,
        y: &mut DVector<f64>,
        algorithm: Algorithm,
    ) -> SdpResult<(usize, f64)> {
        let beta = self.settings.beta;
        let gamma = self.settings.gamma;
        let max_iter = self.settings.max_iter;
        let nu = barrier.degree() as f64;
        let t_final = (nu + (beta + nu.sqrt()) * beta / (1.0 - beta)) / self.settings.eps;

        let mut d = barrier.derivatives(y.as_slice())?;
        let mut factor = HessianFactor::new(&d.hess)?;
        let mut t = 0.0;
        let mut iters = 0;

        loop {
            let c_norm = factor.dual_norm(c);
            if !(c_norm.is_finite() && c_norm > 0.0) {
                return Err(SdpError::Numerical(format!(
                    "invalid local norm of the objective: {}",
                    c_norm
                )));
            }
            t += gamma / c_norm;

            let decrement = loop {
                if iters >= max_iter {
                    return Err(SdpError::MaxIters(max_iter));
                }
                iters += 1;

                let rhs = c * t + &d.grad;
                let step = NewtonStep::compute(&factor, &rhs)?;
                match algorithm {
                    Algorithm::DampedNewton => {
                        *y -= &step.direction / (1.0 + step.decrement);
                    }
                    Algorithm::ShortStep => {
                        self.backtrack(barrier, y, &step.direction)?;
                    }
                }

                d = barrier.derivatives(y.as_slice())?;
                factor = HessianFactor::new(&d.hess)?;

                if algorithm == Algorithm::ShortStep || step.decrement <= beta {
                    break step.decrement;
                }
            };

            if self.settings.verbose {
                log::debug!(
                    "path {:4}: t = {:.3e}, λ = {:.3e}, cᵀy = {:.6e}",
                    iters,
                    t,
                    decrement,
                    c.dot(&*y)
                );
            }

            if t >= t_final {
                return Ok((iters, t));
            }
        }
    }

    /// y ← y − α Δ with α = 1, halved while the result leaves the interior.
    fn backtrack(
        &self,
        barrier: &LmiBarrier<'_>,
        y: &mut DVector<f64>,
        direction: &DVector<f64>,
    ) -> SdpResult<()> {
        let mut alpha = 1.0;
        for _ in 0..MAX_BACKTRACK {
            let candidate = &*y - direction * alpha;
            if barrier.is_interior(candidate.as_slice()) {
                *y = candidate;
                return Ok(());
            }
            alpha *= 0.5;
        }
        if self.settings.verbose {
            log::warn!("short step: no interior point along the Newton direction");
        }
        Err(SdpError::Numerical(
            "backtracking failed to stay in the interior".to_string(),
        ))
    }
}
