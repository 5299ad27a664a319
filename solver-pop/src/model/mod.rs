//! Polynomial problem model: monomials, polynomials, bases and the moment
//! universe.

pub mod basis;
mod monomial;
mod universe;

pub use monomial::{Monomial, Polynomial};
pub use universe::Universe;
