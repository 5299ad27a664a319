//! Assembly of the moment relaxation.
//!
//! Every matrix is an affine family over the universe: matrix `k` of a family
//! multiplies the moment `y_k` of `universe[k]`. Products whose degree exceeds
//! the universe bound have no position and are dropped.

mod localizing;
mod moment;
mod objective;

pub use localizing::localizing_family;
pub use moment::moment_family;
pub use objective::objective_vector;

use crate::model::Polynomial;

/// Half the degree of `g`, rounded up: the order consumed by its localizing
/// matrix.
pub fn half_degree(g: &Polynomial) -> usize {
    (g.degree() as usize).div_ceil(2)
}

/// Smallest admissible relaxation order for a non-empty set of constraints.
///
/// `max_i ⌈deg(g_i)/2⌉`, never below 1.
pub fn minimum_order(constraints: &[Polynomial]) -> usize {
    constraints.iter().map(half_degree).max().unwrap_or(0).max(1)
}
