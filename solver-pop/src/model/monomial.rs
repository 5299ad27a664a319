//! Monomials and polynomials in coefficient-map form.

use std::collections::BTreeMap;
use std::fmt;

/// Power product `x_0^{e_0} ⋯ x_{n-1}^{e_{n-1}}` stored as its exponent tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Monomial(Vec<u32>);

impl Monomial {
    pub fn new(exponents: Vec<u32>) -> Self {
        Self(exponents)
    }

    /// The constant monomial 1 in `n` variables.
    pub fn constant(n: usize) -> Self {
        Self(vec![0; n])
    }

    /// The monomial `x_i` in `n` variables.
    pub fn var(i: usize, n: usize) -> Self {
        let mut e = vec![0; n];
        e[i] = 1;
        Self(e)
    }

    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// Number of variables.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Total degree (sum of all exponents).
    pub fn degree(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn is_constant(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Product of two power products: exponents add elementwise.
    pub fn product(&self, other: &Self) -> Self {
        debug_assert_eq!(self.arity(), other.arity());
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Value at `x`. Zero exponents contribute 1, including `0^0`.
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(self.arity(), x.len());
        self.0
            .iter()
            .zip(x)
            .map(|(&e, &xi)| match i32::try_from(e) {
                Ok(k) => xi.powi(k),
                Err(_) => xi.powf(f64::from(e)),
            })
            .product()
    }
}

impl From<Vec<u32>> for Monomial {
    fn from(exponents: Vec<u32>) -> Self {
        Self(exponents)
    }
}

impl From<&[u32]> for Monomial {
    fn from(exponents: &[u32]) -> Self {
        Self(exponents.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Monomial {
    fn from(exponents: [u32; N]) -> Self {
        Self(exponents.to_vec())
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_constant() {
            return write!(f, "1");
        }
        let mut first = true;
        for (i, &e) in self.0.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            if e == 1 {
                write!(f, "x{}", i)?;
            } else {
                write!(f, "x{}^{}", i, e)?;
            }
        }
        Ok(())
    }
}

/// Polynomial as a map from monomial to coefficient.
///
/// Absent monomials have coefficient 0. Iteration is in monomial order,
/// which keeps floating point accumulation reproducible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, f64>,
}

impl Polynomial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(exponents, coefficient)` pairs. Repeated monomials sum.
    pub fn from_terms<M, I>(terms: I) -> Self
    where
        M: Into<Monomial>,
        I: IntoIterator<Item = (M, f64)>,
    {
        let mut p = Self::new();
        for (mon, coef) in terms {
            p.add_term(mon.into(), coef);
        }
        p
    }

    pub fn add_term(&mut self, mon: Monomial, coef: f64) {
        *self.terms.entry(mon).or_insert(0.0) += coef;
    }

    /// Coefficient of `mon`, 0 if absent.
    pub fn get(&self, mon: &Monomial) -> f64 {
        self.terms.get(mon).copied().unwrap_or(0.0)
    }

    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, f64)> {
        self.terms.iter().map(|(m, &c)| (m, c))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Largest total degree among the stored monomials, 0 if empty.
    pub fn degree(&self) -> u32 {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// Number of variables, read off the first stored monomial.
    pub fn arity(&self) -> Option<usize> {
        self.terms.keys().next().map(Monomial::arity)
    }

    /// Find a monomial whose arity differs from `n`.
    pub fn find_arity_mismatch(&self, n: usize) -> Option<&Monomial> {
        self.terms.keys().find(|m| m.arity() != n)
    }

    pub fn evaluate(&self, x: &[f64]) -> f64 {
        self.terms.iter().map(|(m, &c)| c * m.evaluate(x)).sum()
    }
}

impl<M: Into<Monomial>> FromIterator<(M, f64)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (M, f64)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, (m, c)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "[{}*{}]", c, m)?;
        }
        Ok(())
    }
}
