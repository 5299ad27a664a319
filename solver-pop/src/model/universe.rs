//! Ordered set of every monomial that can index a moment.

use super::{basis, Monomial};
use std::collections::HashMap;
use std::ops::Index;

/// All monomials of degree ≤ `2d`, in basis order, with O(1) position lookup.
///
/// Position `k` of the universe is moment coordinate `y_k`; position 0 is the
/// constant moment fixed to 1.
#[derive(Debug, Clone)]
pub struct Universe {
    degree_bound: usize,
    num_vars: usize,
    monomials: Vec<Monomial>,
    positions: HashMap<Monomial, usize>,
}

impl Universe {
    /// Universe of monomials up to `degree_bound` in `num_vars` variables.
    pub fn new(degree_bound: usize, num_vars: usize) -> Self {
        let monomials = basis::generate(degree_bound, num_vars);
        let positions = monomials
            .iter()
            .enumerate()
            .map(|(k, m)| (m.clone(), k))
            .collect();
        Self {
            degree_bound,
            num_vars,
            monomials,
            positions,
        }
    }

    /// Position of `mon`, `None` when its degree exceeds the bound.
    pub fn position_of(&self, mon: &Monomial) -> Option<usize> {
        self.positions.get(mon).copied()
    }

    pub fn get(&self, k: usize) -> Option<&Monomial> {
        self.monomials.get(k)
    }

    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monomials.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Monomial> {
        self.monomials.iter()
    }

    /// Every monomial except the leading constant (the SDP variables).
    pub fn without_constant(&self) -> &[Monomial] {
        &self.monomials[1..]
    }

    pub fn degree_bound(&self) -> usize {
        self.degree_bound
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }
}

impl Index<usize> for Universe {
    type Output = Monomial;

    fn index(&self, k: usize) -> &Monomial {
        &self.monomials[k]
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a Monomial;
    type IntoIter = std::slice::Iter<'a, Monomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.monomials.iter()
    }
}
