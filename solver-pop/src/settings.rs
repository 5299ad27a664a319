//! Configuration settings for the relaxation solver.

use crate::sample::BallSampling;
use solver_sdp::{Algorithm, SdpSettings};

/// Settings for [`PopSolver`](crate::PopSolver).
#[derive(Debug, Clone)]
pub struct PopSettings {
    /// Print progress information (default from `POP_VERBOSE`).
    pub verbose: bool,

    /// Path-following variant used by the SDP engine.
    pub algorithm: Algorithm,

    /// How [`PopSolver::feasible_point_from_radius`](crate::PopSolver::feasible_point_from_radius)
    /// draws its points.
    pub ball_sampling: BallSampling,

    /// Settings handed to the SDP engine.
    pub sdp: SdpSettings,
}

impl Default for PopSettings {
    fn default() -> Self {
        let verbose = std::env::var("POP_VERBOSE")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let mut sdp = SdpSettings::default();
        sdp.verbose = verbose;

        Self {
            verbose,
            algorithm: Algorithm::default(),
            ball_sampling: BallSampling::default(),
            sdp,
        }
    }
}

impl PopSettings {
    /// Create settings with verbose output enabled at both layers.
    pub fn verbose() -> Self {
        let mut s = Self::default();
        s.verbose = true;
        s.sdp.verbose = true;
        s
    }

    /// Set the path-following variant.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the ball sampling strategy.
    pub fn with_ball_sampling(mut self, strategy: BallSampling) -> Self {
        self.ball_sampling = strategy;
        self
    }

    /// Set the SDP accuracy.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.sdp.eps = eps;
        self
    }

    /// Replace the SDP engine settings.
    pub fn with_sdp(mut self, sdp: SdpSettings) -> Self {
        self.sdp = sdp;
        self
    }
}
