//! Moment matrix assembly.

use crate::model::{basis, Universe};
use solver_sdp::AffineFamily;

/// Moment matrix of order `d` as an affine family over `universe`.
///
/// Entry `(i, j)` of `M(y)` is `y` at `basis[i] · basis[j]`, where `basis` is
/// the degree-`d` basis. Each unordered pair is visited once and written to
/// both `(i, j)` and `(j, i)`.
pub fn moment_family(d: usize, universe: &Universe) -> AffineFamily {
    let basis = basis::generate(d, universe.num_vars());
    let dim = basis.len();

    let mut entries = Vec::new();
    for i in 0..dim {
        for j in i..dim {
            let combined = basis[i].product(&basis[j]);
            let Some(pos) = universe.position_of(&combined) else {
                continue;
            };
            entries.push((pos, i, j, 1.0));
            if i != j {
                entries.push((pos, j, i, 1.0));
            }
        }
    }

    AffineFamily::from_entries(universe.len(), dim, entries)
}
