//! Relaxation orchestrator.

use crate::error::{PopError, PopResult};
use crate::model::{Polynomial, Universe};
use crate::relax::{self, localizing_family, moment_family, objective_vector};
use crate::sample;
use crate::settings::PopSettings;
use rand::Rng;
use solver_sdp::{AffineFamily, SdpError, SdpProblem, SdpSolver};

/// Order-`d` moment relaxation of
///
/// ```text
/// minimize    f(x)
/// subject to  g_i(x) >= 0
/// ```
///
/// All matrix families and the objective vector are built once by
/// [`PopSolver::new`]; [`PopSolver::solve`] hands them to the SDP engine.
pub struct PopSolver {
    num_vars: usize,
    order: usize,
    universe: Universe,
    objective: Vec<f64>,
    engine: SdpSolver,
    settings: PopSettings,
    moments: Option<Vec<f64>>,
}

impl PopSolver {
    /// Build the relaxation with default settings.
    pub fn new(f: Polynomial, g: Vec<Polynomial>, d: usize) -> PopResult<Self> {
        Self::with_settings(f, g, d, PopSettings::default())
    }

    /// Build the relaxation.
    ///
    /// Fails with `EmptyObjective` if `f` has no terms or no variables,
    /// `ArityMismatch` if any monomial disagrees with the arity of `f`,
    /// `NoConstraints` or `EmptyConstraint` if `g` is empty or holds an empty
    /// polynomial, and `InvalidRelaxationOrder` if `d` is below
    /// `max(1, max ⌈deg g_i / 2⌉)`.
    pub fn with_settings(
        f: Polynomial,
        g: Vec<Polynomial>,
        d: usize,
        settings: PopSettings,
    ) -> PopResult<Self> {
        let num_vars = match f.arity() {
            Some(n) if n > 0 => n,
            _ => return Err(PopError::EmptyObjective),
        };
        for p in std::iter::once(&f).chain(&g) {
            if let Some(mon) = p.find_arity_mismatch(num_vars) {
                return Err(PopError::ArityMismatch {
                    expected: num_vars,
                    found: mon.arity(),
                });
            }
        }

        if g.is_empty() {
            return Err(PopError::NoConstraints);
        }
        if let Some(index) = g.iter().position(Polynomial::is_empty) {
            return Err(PopError::EmptyConstraint { index });
        }

        let minimum = relax::minimum_order(&g);
        if d < minimum {
            return Err(PopError::InvalidRelaxationOrder { minimum });
        }

        let universe = Universe::new(2 * d, num_vars);

        let mut blocks = Vec::with_capacity(g.len() + 1);
        blocks.push(moment_family(d, &universe));
        for gi in &g {
            blocks.push(localizing_family(d - relax::half_degree(gi), &universe, gi));
        }

        let dropped = f.terms().filter(|(m, _)| universe.position_of(m).is_none()).count();
        if dropped > 0 && settings.verbose {
            log::warn!(
                "{} objective term(s) exceed degree {} and are ignored",
                dropped,
                2 * d
            );
        }
        let objective = objective_vector(&f, &universe);

        if settings.verbose {
            log::info!(
                "relaxation of order {}: {} variables, {} moments, moment matrix {}x{}, {} localizing matrices",
                d,
                num_vars,
                universe.len(),
                blocks[0].dim(),
                blocks[0].dim(),
                g.len()
            );
        }

        let problem = SdpProblem::new(objective.clone(), blocks);
        let engine = SdpSolver::new(problem, settings.sdp.clone())?;

        Ok(Self {
            num_vars,
            order: d,
            universe,
            objective,
            engine,
            settings,
            moments: None,
        })
    }

    /// Solve the relaxation from a strictly feasible moment vector and return
    /// the first-order moments `y[0..n]`.
    pub fn solve(&mut self, start: &[f64]) -> PopResult<Vec<f64>> {
        let y = self.engine.solve(start, self.settings.algorithm)?;
        let x = y[..self.num_vars].to_vec();

        if self.settings.verbose {
            if let Ok(info) = self.engine.info() {
                log::info!("relaxation {}: objective {:.6e}", info.status, info.obj_val);
            }
        }

        self.moments = Some(y);
        Ok(x)
    }

    /// Moment vector of the last successful solve.
    pub fn moment_vector(&self) -> PopResult<&[f64]> {
        self.moments.as_deref().ok_or(PopError::NotSolvedYet)
    }

    /// Numerical rank of the moment matrix at the solution.
    ///
    /// Rank 1 certifies that the relaxation is exact and `solve` returned the
    /// global minimizer.
    pub fn moment_matrix_rank(&self) -> PopResult<usize> {
        if self.moments.is_none() {
            return Err(PopError::NotSolvedYet);
        }
        let ranks = self.engine.ranks()?;
        ranks
            .first()
            .copied()
            .ok_or_else(|| SdpError::InvalidProblem("no moment block".to_string()).into())
    }

    pub fn set_print_output(&mut self, verbose: bool) {
        self.settings.verbose = verbose;
        self.settings.sdp.verbose = verbose;
        self.engine.set_verbose(verbose);
    }

    /// Starting point from the empirical moments of `samples`.
    ///
    /// At least `C(n + d, n)` points are needed. They should satisfy every
    /// constraint strictly for the result to be interior.
    pub fn feasible_point<S: AsRef<[f64]>>(&self, samples: &[S]) -> PopResult<Vec<f64>> {
        sample::moments_from_samples(&self.universe, self.order, samples)
    }

    /// Starting point from random points of the open ball of radius `radius`.
    ///
    /// Only interior when the ball lies inside the feasible set.
    pub fn feasible_point_from_radius<R: Rng + ?Sized>(
        &self,
        radius: f64,
        rng: &mut R,
    ) -> PopResult<Vec<f64>> {
        sample::moments_from_radius(
            &self.universe,
            self.order,
            radius,
            self.settings.ball_sampling,
            rng,
        )
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn relaxation_order(&self) -> usize {
        self.order
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn moment_matrix(&self) -> &AffineFamily {
        &self.engine.problem().blocks[0]
    }

    /// Localizing families, in constraint order.
    pub fn localizing_matrices(&self) -> &[AffineFamily] {
        &self.engine.problem().blocks[1..]
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn settings(&self) -> &PopSettings {
        &self.settings
    }
}
