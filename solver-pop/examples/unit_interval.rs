//! Minimize x⁴ - x² + 0.1·x over [-1, 1] with relaxations of increasing order.
//!
//! Run with `cargo run --example unit_interval`. Set `POP_VERBOSE=1` to see
//! solver progress through any `log` backend.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use solver_pop::{Polynomial, PopSolver};

fn main() -> Result<()> {
    let f = Polynomial::from_terms(vec![([4], 1.0), ([2], -1.0), ([1], 0.1)]);
    let g = Polynomial::from_terms(vec![([0], 1.0), ([2], -1.0)]);
    println!("minimize {}  subject to  {} >= 0", f, g);

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for d in 2..=4 {
        let mut pop = PopSolver::new(f.clone(), vec![g.clone()], d)?;
        let start = pop.feasible_point_from_radius(1.0, &mut rng)?;
        let x = pop.solve(&start)?;
        let rank = pop.moment_matrix_rank()?;

        println!(
            "order {}: x = {:+.6}, f(x) = {:+.6}, moment matrix rank {}",
            d,
            x[0],
            f.evaluate(&x),
            rank
        );
    }
    Ok(())
}
