//! Feasible starting points for the relaxation.
//!
//! The empirical moments of a set of points form a valid moment vector. When
//! the points satisfy every constraint strictly and there are at least as many
//! of them as basis monomials, the moment and localizing matrices are
//! generically positive definite, which is what the SDP engine needs as a
//! start.

use crate::error::{PopError, PopResult};
use crate::model::{basis, Universe};
use rand::Rng;
use rand_distr::StandardNormal;

/// How points are drawn from the open ball of radius R.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallSampling {
    /// Uniform in the cube `[-R, R]^n`, kept only if `‖x‖ < R`.
    ///
    /// The acceptance rate is the ball-to-cube volume ratio, which decays
    /// quickly with n.
    #[default]
    Rejection,

    /// Normalized Gaussian direction scaled by `R·u^{1/n}`. One draw per point.
    Direct,
}

/// Minimum number of samples, C(n + d, n).
pub fn minimum_samples(num_vars: usize, order: usize) -> usize {
    basis::basis_size(order, num_vars)
}

/// Number of points drawn by [`moments_from_radius`], ⌈1.5·C(n + d, n) + 1⌉.
pub fn radius_sample_count(num_vars: usize, order: usize) -> usize {
    (3 * minimum_samples(num_vars, order) + 3) / 2
}

/// Empirical moment vector over the non-constant universe monomials.
///
/// `y[k] = (1/N) Σ_x universe[k + 1](x)`.
pub fn moments_from_samples<S: AsRef<[f64]>>(
    universe: &Universe,
    order: usize,
    samples: &[S],
) -> PopResult<Vec<f64>> {
    let n = universe.num_vars();
    let required = minimum_samples(n, order);
    if samples.len() < required {
        return Err(PopError::InsufficientSamples {
            required,
            provided: samples.len(),
        });
    }

    let used = universe.without_constant();
    let mut y = vec![0.0; used.len()];
    for x in samples {
        let x = x.as_ref();
        if x.len() != n {
            return Err(PopError::SampleDimension {
                expected: n,
                found: x.len(),
            });
        }
        for (yk, mon) in y.iter_mut().zip(used) {
            *yk += mon.evaluate(x);
        }
    }

    let scale = 1.0 / samples.len() as f64;
    for yk in y.iter_mut() {
        *yk *= scale;
    }
    Ok(y)
}

/// Draw `count` points from the open ball of the given radius.
pub fn sample_ball<R: Rng + ?Sized>(
    rng: &mut R,
    num_vars: usize,
    radius: f64,
    count: usize,
    strategy: BallSampling,
) -> PopResult<Vec<Vec<f64>>> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(PopError::InvalidRadius(radius));
    }

    let mut points = Vec::with_capacity(count);
    match strategy {
        BallSampling::Rejection => {
            // no retry bound; see BallSampling::Direct for large n
            while points.len() < count {
                let x: Vec<f64> = (0..num_vars).map(|_| rng.gen_range(-radius..radius)).collect();
                if norm(&x) < radius {
                    points.push(x);
                }
            }
        }
        BallSampling::Direct => {
            while points.len() < count {
                let dir: Vec<f64> = (0..num_vars).map(|_| rng.sample(StandardNormal)).collect();
                let len = norm(&dir);
                if len == 0.0 && num_vars > 0 {
                    continue;
                }
                let u: f64 = rng.gen();
                let r = radius * u.powf(1.0 / num_vars.max(1) as f64);
                let scale = if len > 0.0 { r / len } else { 0.0 };
                points.push(dir.into_iter().map(|v| v * scale).collect());
            }
        }
    }
    Ok(points)
}

/// Moment vector from ⌈1.5·C(n + d, n) + 1⌉ random points of the ball.
pub fn moments_from_radius<R: Rng + ?Sized>(
    universe: &Universe,
    order: usize,
    radius: f64,
    strategy: BallSampling,
    rng: &mut R,
) -> PopResult<Vec<f64>> {
    let n = universe.num_vars();
    let count = radius_sample_count(n, order);
    let points = sample_ball(rng, n, radius, count, strategy)?;
    moments_from_samples(universe, order, &points)
}

fn norm(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_sample_counts() {
        assert_eq!(minimum_samples(1, 1), 2);
        assert_eq!(radius_sample_count(1, 1), 4);
        // C(5, 2) = 10 -> 16
        assert_eq!(radius_sample_count(2, 3), 16);
        // C(4, 3) = 4 -> 7
        assert_eq!(radius_sample_count(3, 1), 7);
        // odd count rounds up: C(3, 1) = 3 -> 5.5 -> 6
        assert_eq!(radius_sample_count(1, 2), 6);
    }

    #[test]
    fn test_singleton_is_point_evaluation() {
        // order 0 needs a single point
        let u = Universe::new(4, 2);
        let x0 = [0.7, -1.3];
        let y = moments_from_samples(&u, 0, &[x0]).unwrap();
        for (k, mon) in u.without_constant().iter().enumerate() {
            let expected: f64 = mon
                .exponents()
                .iter()
                .zip(&x0)
                .map(|(&e, &x)| x.powi(e as i32))
                .product();
            assert_eq!(y[k], expected);
        }
    }

    #[test]
    fn test_average_of_samples() {
        let u = Universe::new(2, 1);
        let y = moments_from_samples(&u, 1, &[vec![1.0], vec![-3.0]]).unwrap();
        assert_eq!(y, vec![-1.0, 5.0]);
    }

    #[test]
    fn test_insufficient_samples() {
        let (n, d) = (2, 2);
        let u = Universe::new(2 * d, n);
        let required = minimum_samples(n, d);
        let samples = vec![vec![0.1, 0.2]; required - 1];
        assert_eq!(
            moments_from_samples(&u, d, &samples).unwrap_err(),
            PopError::InsufficientSamples {
                required,
                provided: required - 1
            }
        );
        let samples = vec![vec![0.1, 0.2]; required];
        assert!(moments_from_samples(&u, d, &samples).is_ok());
    }

    #[test]
    fn test_sample_dimension_checked() {
        let u = Universe::new(2, 2);
        let samples = vec![vec![0.1, 0.2], vec![0.1], vec![0.3, 0.3]];
        assert_eq!(
            moments_from_samples(&u, 1, &samples).unwrap_err(),
            PopError::SampleDimension {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_ball_points_inside() {
        for strategy in [BallSampling::Rejection, BallSampling::Direct] {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let pts = sample_ball(&mut rng, 3, 2.0, 200, strategy).unwrap();
            assert_eq!(pts.len(), 200);
            assert!(pts.iter().all(|p| p.len() == 3 && norm(p) < 2.0));
        }
    }

    #[test]
    fn test_ball_sampling_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let u = Universe::new(2, 2);
        let ya = moments_from_radius(&u, 1, 1.0, BallSampling::Rejection, &mut a).unwrap();
        let yb = moments_from_radius(&u, 1, 1.0, BallSampling::Rejection, &mut b).unwrap();
        assert_eq!(ya, yb);
    }

    #[test]
    fn test_invalid_radius() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            sample_ball(&mut rng, 2, 0.0, 3, BallSampling::Rejection).unwrap_err(),
            PopError::InvalidRadius(0.0)
        );
        assert!(sample_ball(&mut rng, 2, f64::NAN, 3, BallSampling::Direct).is_err());
    }
}
