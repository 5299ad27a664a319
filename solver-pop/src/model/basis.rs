//! Monomial basis enumeration.
//!
//! `generate(bound, n)` lists every exponent tuple of `n` variables with total
//! degree at most `bound`. The order is part of the contract:
//!
//! - graded: all monomials of degree k come before those of degree k+1
//! - inside a degree, descending lexicographic on the exponent tuple
//!
//! so index 0 is the constant and indices `1..=n` are `x_0, …, x_{n-1}` in
//! variable order. Solutions are read off the first `n` moment coordinates
//! relying on exactly this layout.

use super::Monomial;

/// Binomial coefficient C(n, k), exact in integers.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // multiplicative formula keeps every intermediate an integer
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}

/// Number of monomials of degree ≤ `bound` in `n` variables, C(n + bound, n).
pub fn basis_size(bound: usize, n: usize) -> usize {
    binomial(n + bound, n)
}

/// All monomials of total degree ≤ `bound` in `n` variables, graded order.
pub fn generate(bound: usize, n: usize) -> Vec<Monomial> {
    let mut out = Vec::with_capacity(basis_size(bound, n));
    let mut exps = vec![0u32; n];
    for degree in 0..=bound {
        if n == 0 {
            // the empty tuple only has degree 0
            if degree == 0 {
                out.push(Monomial::new(Vec::new()));
            }
            continue;
        }
        push_degree(&mut out, &mut exps, 0, degree as u32);
    }
    out
}

/// Append every tuple with `exps[pos..]` summing to `remaining`,
/// largest leading exponent first.
fn push_degree(out: &mut Vec<Monomial>, exps: &mut [u32], pos: usize, remaining: u32) {
    if pos + 1 == exps.len() {
        exps[pos] = remaining;
        out.push(Monomial::from(&exps[..]));
        return;
    }
    for e in (0..=remaining).rev() {
        exps[pos] = e;
        push_degree(out, exps, pos + 1, remaining - e);
    }
    exps[pos] = 0;
}
