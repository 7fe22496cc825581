//! Units, associates, canonical forms and primality of Eisenstein integers

use super::{EisensteinBase, EisensteinInt};
use crate::traits::IntegerPrimality;
use num_integer::Integer;
use num_traits::{One, RefNum, Signed, Zero};

impl<T: EisensteinBase> EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    // multiply by the unit 1 + ω, i.e. rotate by 60° counterclockwise
    #[inline]
    fn rotate(&self) -> Self {
        EisensteinInt::new(&self.a - &self.b, self.a.clone())
    }

    // `start` multiplied by (1 + ω)^k for k = 0..6
    fn rotations(start: Self) -> [Self; 6] {
        let r1 = start.rotate();
        let r2 = r1.rotate();
        let r3 = r2.rotate();
        let r4 = r3.rotate();
        let r5 = r4.rotate();
        debug_assert!(r5.rotate() == start); // 1 + ω has order 6
        [start, r1, r2, r3, r4, r5]
    }

    /// Determine if the number is a unit (i.e. its norm is 1)
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.norm().is_one()
    }

    /// Determine if the number is divisible by `1 - ω`, the prime above 3.
    ///
    /// This holds iff `a + b ≡ 0 (mod 3)`, equivalently iff the norm is divisible by 3.
    #[inline]
    pub fn is_even(&self) -> bool {
        let three = T::one() + T::one() + T::one();
        (&self.a + &self.b).mod_floor(&three).is_zero()
    }

    /// The six units `1, 1 + ω, ω, -1, -1 - ω, -ω`, ordered as the successive
    /// powers of `1 + ω` (counterclockwise by 60° in the complex plane)
    pub fn units() -> [Self; 6] {
        Self::rotations(Self::one())
    }

    /// The six products of `self` with the units, in the same order as [EisensteinInt::units]
    pub fn associates(&self) -> [Self; 6] {
        Self::rotations(self.clone())
    }

    // Rotate a nonzero number into the first sextant `a > b >= 0` of the plane.
    //
    // The plane without the origin is split into six sextants, the k-th one spanned
    // by units()[k] (inclusive) and units()[k + 1] (exclusive). Returns the rotated
    // number and k, so that `self == rotated * units()[k]`.
    fn to_first_sextant(&self) -> Option<(Self, usize)> {
        let (a, b) = (&self.a, &self.b);
        let sextant = if b.is_zero() {
            if a.is_positive() {
                0
            } else if a.is_negative() {
                3
            } else {
                return None;
            }
        } else if b.is_positive() {
            if a > b {
                0
            } else if a.is_positive() {
                1
            } else {
                2
            }
        } else if !a.is_negative() {
            5
        } else if a < b {
            3
        } else {
            4
        };

        let rotated = match sextant {
            0 => self.clone(),
            1 => EisensteinInt::new(b.clone(), b - a),
            2 => EisensteinInt::new(b - a, T::zero() - a),
            3 => EisensteinInt::new(T::zero() - a, T::zero() - b),
            4 => EisensteinInt::new(T::zero() - b, a - b),
            _ => EisensteinInt::new(a - b, a.clone()),
        };
        Some((rotated, sextant))
    }

    /// The canonical associate of the number, the one lying in the first sextant
    /// `a > b >= 0` (e.g. `-2 - 2ω` becomes `2`). Zero stays zero.
    ///
    /// Two numbers are associates iff their canonical forms are equal.
    pub fn canonical(&self) -> Self {
        match self.to_first_sextant() {
            Some((rotated, _)) => rotated,
            None => Self::zero(),
        }
    }
}

impl<T: EisensteinBase + IntegerPrimality> EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Test if the number is an Eisenstein prime.
    ///
    /// `a + bω` is reported prime iff
    /// 1. `b = 0` and `a` is a rational prime with `a ≡ 2 (mod 3)`, or
    /// 2. `a = 0` and `b` is a rational prime with `b ≡ 2 (mod 3)`, or
    /// 3. the norm is a rational prime `p` with `p = 3` or `p ≡ 1 (mod 3)`.
    ///
    /// The first two cases only accept the positive associates on the axes, so
    /// `-2` or `2 + 2ω` are not reported prime although `2` is. Use
    /// [EisensteinInt::is_prime_up_to_units] for a test that is invariant under
    /// multiplication by units.
    pub fn is_prime(&self) -> bool {
        let two = T::one() + T::one();
        let three = &two + T::one();

        // inert primes
        if self.b.is_zero() && self.a.is_prime_integer() && self.a.mod_floor(&three) == two {
            return true;
        }
        if self.a.is_zero() && self.b.is_prime_integer() && self.b.mod_floor(&three) == two {
            return true;
        }

        // split primes, and the ramified prime 1 - ω with norm 3
        let norm = self.norm();
        norm.is_prime_integer() && (norm == three || norm.mod_floor(&three).is_one())
    }

    /// Test if any associate of the number passes [EisensteinInt::is_prime],
    /// i.e. whether the number is a prime element of the ring.
    pub fn is_prime_up_to_units(&self) -> bool {
        self.associates().iter().any(|x| x.is_prime())
    }
}
