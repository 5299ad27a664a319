//! Finite-difference checks of the log-det barrier.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use solver_sdp::lmi::LmiBarrier;
use solver_sdp::AffineFamily;

const FD_STEP: f64 = 1e-6;
const FD_GRAD_TOL: f64 = 1e-5;
const FD_HESS_TOL: f64 = 1e-4;

/// Order-2 moment relaxation of x ∈ [-1, 1]: the 3×3 Hankel matrix in
/// (y1..y4) plus the 2×2 localizing matrix of 1 - x².
fn hankel_blocks() -> Vec<AffineFamily> {
    let mut moment = Vec::new();
    for i in 0..3 {
        for j in 0..3 {
            moment.push((i + j, i, j, 1.0));
        }
    }
    let mut localizing = Vec::new();
    for i in 0..2 {
        for j in 0..2 {
            localizing.push((i + j, i, j, 1.0));
            localizing.push((i + j + 2, i, j, -1.0));
        }
    }
    vec![
        AffineFamily::from_entries(5, 3, moment),
        AffineFamily::from_entries(5, 2, localizing),
    ]
}

/// Empirical moments of a few points in (-1, 1) are strictly feasible.
fn random_interior_point(rng: &mut ChaCha8Rng) -> Vec<f64> {
    let xs: Vec<f64> = (0..10).map(|_| rng.gen_range(-0.9..0.9)).collect();
    (1..=4)
        .map(|k| xs.iter().map(|x| x.powi(k)).sum::<f64>() / xs.len() as f64)
        .collect()
}

fn rel_err(a: f64, b: f64) -> f64 {
    (a - b).abs() / (1.0 + a.abs().max(b.abs()))
}

#[test]
fn test_gradient_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let blocks = hankel_blocks();
    let barrier = LmiBarrier::new(&blocks, 4);

    for _ in 0..20 {
        let y = random_interior_point(&mut rng);
        assert!(barrier.is_interior(&y));
        let d = barrier.derivatives(&y).unwrap();

        for i in 0..4 {
            let mut yp = y.clone();
            let mut ym = y.clone();
            yp[i] += FD_STEP;
            ym[i] -= FD_STEP;
            let fd = (barrier.value(&yp) - barrier.value(&ym)) / (2.0 * FD_STEP);
            assert!(
                rel_err(fd, d.grad[i]) < FD_GRAD_TOL,
                "gradient mismatch at {}: fd={} analytic={}",
                i,
                fd,
                d.grad[i]
            );
        }
    }
}

#[test]
fn test_hessian_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(54321);
    let blocks = hankel_blocks();
    let barrier = LmiBarrier::new(&blocks, 4);

    for _ in 0..20 {
        let y = random_interior_point(&mut rng);
        let d = barrier.derivatives(&y).unwrap();

        for j in 0..4 {
            let mut yp = y.clone();
            let mut ym = y.clone();
            yp[j] += FD_STEP;
            ym[j] -= FD_STEP;
            let gp = barrier.derivatives(&yp).unwrap().grad;
            let gm = barrier.derivatives(&ym).unwrap().grad;
            for i in 0..4 {
                let fd = (gp[i] - gm[i]) / (2.0 * FD_STEP);
                assert!(
                    rel_err(fd, d.hess[(i, j)]) < FD_HESS_TOL,
                    "Hessian mismatch at ({}, {}): fd={} analytic={}",
                    i,
                    j,
                    fd,
                    d.hess[(i, j)]
                );
            }
        }
    }
}

#[test]
fn test_hessian_positive_definite() {
    let mut rng = ChaCha8Rng::seed_from_u64(777);
    let blocks = hankel_blocks();
    let barrier = LmiBarrier::new(&blocks, 4);

    for _ in 0..10 {
        let y = random_interior_point(&mut rng);
        let d = barrier.derivatives(&y).unwrap();
        let eig = nalgebra::SymmetricEigen::new(d.hess);
        assert!(eig.eigenvalues.iter().all(|&v| v > 0.0));
    }
}
