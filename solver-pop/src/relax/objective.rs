//! Objective coefficients over the moment variables.

use crate::model::{Polynomial, Universe};

/// Coefficients of `f` on the non-constant universe monomials.
///
/// `c[k - 1]` is the coefficient of `universe[k]`. The constant term only
/// shifts the objective value and is left out.
pub fn objective_vector(f: &Polynomial, universe: &Universe) -> Vec<f64> {
    universe.without_constant().iter().map(|m| f.get(m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Monomial;

    #[test]
    fn test_constant_is_excluded() {
        let u = Universe::new(4, 2);
        let alpha = Monomial::from([1, 2]);
        let f = Polynomial::from_terms(vec![(Monomial::constant(2), 5.0), (alpha.clone(), 3.0)]);
        let c = objective_vector(&f, &u);

        assert_eq!(c.len(), u.len() - 1);
        assert_eq!(c[u.position_of(&alpha).unwrap() - 1], 3.0);
        assert!(!c.contains(&5.0));
        assert_eq!(c.iter().filter(|&&v| v != 0.0).count(), 1);
    }

    #[test]
    fn test_square() {
        let u = Universe::new(2, 1);
        let f = Polynomial::from_terms(vec![([2], 1.0)]);
        assert_eq!(objective_vector(&f, &u), vec![0.0, 1.0]);
    }

    #[test]
    fn test_high_degree_terms_have_no_slot() {
        let u = Universe::new(2, 1);
        let f = Polynomial::from_terms(vec![([1], -1.0), ([4], 1.0)]);
        assert_eq!(objective_vector(&f, &u), vec![-1.0, 0.0]);
    }
}
