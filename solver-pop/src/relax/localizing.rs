//! Localizing matrix assembly for one constraint.

use crate::model::{basis, Polynomial, Universe};
use solver_sdp::AffineFamily;

/// Localizing matrix of `g` at reduced order `r` as an affine family.
///
/// Entry `(i, j)` of `L_g(y)` is `Σ_mon coef · y` at `basis[i] · basis[j] · mon`.
/// Contributions landing in the same `(pos, i, j)` cell are summed, never
/// overwritten.
pub fn localizing_family(r: usize, universe: &Universe, g: &Polynomial) -> AffineFamily {
    let basis = basis::generate(r, universe.num_vars());
    let dim = basis.len();

    let mut entries = Vec::new();
    for (mon, coef) in g.terms() {
        for i in 0..dim {
            for j in i..dim {
                let combined = basis[i].product(&basis[j]).product(mon);
                let Some(pos) = universe.position_of(&combined) else {
                    continue;
                };
                entries.push((pos, i, j, coef));
                if i != j {
                    entries.push((pos, j, i, coef));
                }
            }
        }
    }

    // duplicate (pos, i, j) triplets are summed on assembly
    AffineFamily::from_entries(universe.len(), dim, entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Monomial;
    use crate::relax::moment_family;

    #[test]
    fn test_interval_constraint_order_zero() {
        // 1 - x² at r = 0 is the scalar 1 - y2
        let u = Universe::new(2, 1);
        let g = Polynomial::from_terms(vec![([0], 1.0), ([2], -1.0)]);
        let lm = localizing_family(0, &u, &g);
        assert_eq!(lm.len(), 3);
        assert_eq!(lm.dim(), 1);
        assert_eq!(lm.entry(0, 0, 0), 1.0);
        assert_eq!(lm.entry(1, 0, 0), 0.0);
        assert_eq!(lm.entry(2, 0, 0), -1.0);
    }

    #[test]
    fn test_constant_constraint_scales_moment_matrix() {
        let u = Universe::new(4, 2);
        let mm = moment_family(2, &u);
        let g = Polynomial::from_terms(vec![([0, 0], 2.5)]);
        let lm = localizing_family(2, &u, &g);
        assert_eq!(lm.dim(), mm.dim());
        for p in 0..u.len() {
            assert_eq!(lm.dense(p), mm.dense(p) * 2.5);
        }
    }

    #[test]
    fn test_single_monomial_shifts_moment_structure() {
        // g = c·x0: entry (i, j) of matrix pos is c exactly when
        // basis[i]·basis[j]·x0 = universe[pos]
        let (n, d, r) = (2, 2, 1);
        let u = Universe::new(2 * d, n);
        let basis = basis::generate(r, n);
        let x0 = Monomial::var(0, n);
        let g = Polynomial::from_terms(vec![(x0.clone(), 3.0)]);
        let lm = localizing_family(r, &u, &g);

        for i in 0..lm.dim() {
            for j in 0..lm.dim() {
                let target = basis[i].product(&basis[j]).product(&x0);
                let pos = u.position_of(&target).unwrap();
                for p in 0..u.len() {
                    let expected = if p == pos { 3.0 } else { 0.0 };
                    assert_eq!(lm.entry(p, i, j), expected);
                }
            }
        }
    }

    #[test]
    fn test_superposition() {
        let (n, d, r) = (2, 2, 1);
        let u = Universe::new(2 * d, n);
        let m1 = Monomial::var(0, n);
        let m2 = Monomial::var(1, n);

        let g1 = Polynomial::from_terms(vec![(m1.clone(), 1.5)]);
        let g2 = Polynomial::from_terms(vec![(m2.clone(), -4.0)]);
        let both = Polynomial::from_terms(vec![(m1, 1.5), (m2, -4.0)]);

        let l1 = localizing_family(r, &u, &g1);
        let l2 = localizing_family(r, &u, &g2);
        let lb = localizing_family(r, &u, &both);

        for p in 0..u.len() {
            assert_eq!(lb.dense(p), l1.dense(p) + l2.dense(p));
        }

        // basis = [1, x0, x1]: x0·x1 is reached through cell (0, 2) by x0 and
        // through cell (0, 1) by x1
        let x0x1 = u.position_of(&Monomial::from([1, 1])).unwrap();
        assert_eq!(lb.entry(x0x1, 0, 2), 1.5);
        assert_eq!(lb.entry(x0x1, 2, 0), 1.5);
        assert_eq!(lb.entry(x0x1, 0, 1), -4.0);
        assert_eq!(lb.entry(x0x1, 1, 0), -4.0);
    }

    #[test]
    fn test_repeated_terms_are_merged() {
        let u = Universe::new(2, 2);
        let g = Polynomial::from_terms(vec![([1, 0], 2.0), ([0, 1], -1.0), ([1, 0], 0.5)]);
        let lm = localizing_family(0, &u, &g);
        assert_eq!(lm.entry(1, 0, 0), 2.5);
        assert_eq!(lm.entry(2, 0, 0), -1.0);
    }

    #[test]
    fn test_products_beyond_universe_dropped() {
        // x² at r = 1 in a degree-2 universe: only the (0, 0) cell survives
        let u = Universe::new(2, 1);
        let g = Polynomial::from_terms(vec![([2], 1.0)]);
        let lm = localizing_family(1, &u, &g);
        assert_eq!(lm.entry(2, 0, 0), 1.0);
        assert_eq!(lm.nnz(), 1);
    }

    #[test]
    fn test_symmetric() {
        let u = Universe::new(4, 2);
        let g = Polynomial::from_terms(vec![([0, 0], 1.0), ([1, 1], 0.3), ([2, 0], -1.0)]);
        let lm = localizing_family(1, &u, &g);
        for p in 0..u.len() {
            let m = lm.dense(p);
            assert_eq!(m, m.transpose());
        }
    }
}
