//! Data structures and algorithms implementations related to
//! Eisenstein integers, i.e. the ring `ℤ[ω]` where `ω` is a primitive cube root of unity.
//!
//! An Eisenstein integer is stored as the pair `(a, b)` meaning `a + bω`. Using
//! `ω² = -1 - ω`, all the ring operations can be carried out on the coefficients:
//! - product: `(a + bω)(c + dω) = (ac - bd) + (ad + b(c - d))ω`
//! - conjugate: `a + bω ↦ (a - b) - bω`
//! - norm: `a² - ab + b²`, which is multiplicative and positive definite
//!
//! The ring is Euclidean with respect to the norm, which gives the division with
//! remainder, the gcd and the primality test implemented in this module.
//!
//! # References:
//! - <https://en.wikipedia.org/wiki/Eisenstein_integer>
//! - <https://proofwiki.org/wiki/Norm_of_Eisenstein_Integer>
//! - <https://mathworld.wolfram.com/EisensteinPrime.html>
//! - <http://math.bu.edu/people/jsweinst/Teaching/MA341Spring18/MA341Notes.pdf>

mod euclid;
mod integer;
mod units;

pub use integer::EisensteinInt;

use num_integer::Integer;
use num_traits::{NumRef, Signed};

/// A helper trait to define valid type that can be used as the coefficients of [EisensteinInt]
pub trait EisensteinBase: Integer + NumRef + Clone + Signed {}
impl<T: Integer + NumRef + Clone + Signed> EisensteinBase for T {}
