//! Euclidean division, modulo and gcd of Eisenstein integers

use super::{EisensteinBase, EisensteinInt};
use crate::error::EisensteinError;
use core::ops::{Div, Rem};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, RefNum, Zero};

// Round n/d to the nearest integer, ties towards minus infinity.
// Equivalent to incrementing floor(n/d) = q when (2q + 1)d < 2n. Assumes d > 0.
#[inline]
fn div_round<T: EisensteinBase>(n: &T, d: &T) -> T
where
    for<'r> &'r T: RefNum<T>,
{
    let (q, r) = n.div_mod_floor(d);
    if &r + &r > *d {
        q + T::one()
    } else {
        q
    }
}

impl<T: EisensteinBase> EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    // norm of the divisor, rejecting the zero element
    #[inline]
    fn divisor_norm(&self) -> Result<T, EisensteinError> {
        let norm = self.norm();
        if norm.is_zero() {
            Err(EisensteinError::DivisionByZero)
        } else {
            Ok(norm)
        }
    }

    // Quotient with remainder, given the (nonzero) norm of the divisor.
    //
    // The exact quotient is self * conj(divisor) / norm(divisor). Rounding each
    // coordinate to the nearest integer leaves fractional parts x, y with
    // |x|, |y| <= 1/2, so the remainder norm is at most
    // (x² - xy + y²) * norm(divisor) <= 3/4 * norm(divisor).
    fn div_mod_with_norm(&self, divisor: &Self, norm: &T) -> (Self, Self) {
        let numer: Self = self * &divisor.conj();
        let quo = EisensteinInt::new(div_round::<T>(&numer.a, norm), div_round::<T>(&numer.b, norm));
        let rem = self - &(&quo * divisor);
        (quo, rem)
    }

    /// Quotient of the Euclidean division, see [EisensteinInt::div_mod_floor]
    #[inline]
    pub fn div_floor(&self, divisor: &Self) -> Result<Self, EisensteinError> {
        self.div_mod_floor(divisor).map(|(q, _)| q)
    }

    /// Remainder of the Euclidean division, see [EisensteinInt::div_mod_floor]
    #[inline]
    pub fn mod_floor(&self, divisor: &Self) -> Result<Self, EisensteinError> {
        self.div_mod_floor(divisor).map(|(_, r)| r)
    }

    /// Simultaneous Euclidean division and modulo.
    ///
    /// Returns `(q, r)` such that `self == q * divisor + r` and
    /// `r.norm() < divisor.norm()`. The quotient is the exact quotient
    /// `self / divisor` in `ℚ(ω)` with both coordinates rounded to the nearest
    /// integer (halves round down), which may differ from the quotient of
    /// plain integer floor division: `13 = 3 * 5 + (-2)`.
    ///
    /// # Errors
    /// [EisensteinError::DivisionByZero] if `divisor` is zero.
    pub fn div_mod_floor(&self, divisor: &Self) -> Result<(Self, Self), EisensteinError> {
        let norm = divisor.divisor_norm()?;
        Ok(self.div_mod_with_norm(divisor, &norm))
    }

    /// Euclidean division by searching the remainder with the minimal norm among the
    /// quotients `(qa, qb)`, `(qa + 1, qb)`, `(qa, qb + 1)` and `(qa + 1, qb + 1)`,
    /// where `(qa, qb)` is the exact quotient floored on both coordinates.
    ///
    /// Ties keep the first candidate in that order. The result satisfies the same
    /// contract as [EisensteinInt::div_mod_floor] and its remainder is never larger,
    /// but the quotients of the two methods can differ.
    pub fn div_mod_brute_force(&self, divisor: &Self) -> Result<(Self, Self), EisensteinError> {
        let norm = divisor.divisor_norm()?;
        let numer: Self = self * &divisor.conj();
        let qa = numer.a.div_floor(&norm);
        let qb = numer.b.div_floor(&norm);

        let first = EisensteinInt::new(qa.clone(), qb.clone());
        let others = [
            EisensteinInt::new(&qa + T::one(), qb.clone()),
            EisensteinInt::new(qa.clone(), &qb + T::one()),
            EisensteinInt::new(qa + T::one(), qb + T::one()),
        ];

        let first_rem = self - &(&first * divisor);
        let first_norm = first_rem.norm();
        let (quo, rem, _) = others.iter().fold((first, first_rem, first_norm), |best, quo| {
            let rem = self - &(quo * divisor);
            let rem_norm = rem.norm();
            if rem_norm < best.2 {
                (quo.clone(), rem, rem_norm)
            } else {
                best
            }
        });
        Ok((quo, rem))
    }

    /// The exact quotient `self / divisor = x + yω` in `ℚ(ω)`, returned as `(x, y)`
    ///
    /// # Errors
    /// [EisensteinError::DivisionByZero] if `divisor` is zero.
    pub fn rational_quotient(&self, divisor: &Self) -> Result<(Ratio<T>, Ratio<T>), EisensteinError> {
        let norm = divisor.divisor_norm()?;
        let numer: Self = self * &divisor.conj();
        Ok((Ratio::new(numer.a, norm.clone()), Ratio::new(numer.b, norm)))
    }

    /// Test if `self` is a multiple of `other`. Only zero is a multiple of zero.
    pub fn is_multiple_of(&self, other: &Self) -> bool {
        match other.divisor_norm() {
            Ok(norm) => self.div_mod_with_norm(other, &norm).1.is_zero(),
            Err(_) => self.is_zero(),
        }
    }

    /// Greatest common divisor computed with the Euclidean algorithm.
    ///
    /// The result is only unique up to a unit factor. Compare the
    /// [canonical](EisensteinInt::canonical) forms to check two gcds for equality.
    /// The gcd of zero and zero is zero.
    pub fn gcd(&self, other: &Self) -> Self {
        let (mut a, mut b) = if self.norm() < other.norm() {
            (other.clone(), self.clone())
        } else {
            (self.clone(), other.clone())
        };

        loop {
            let norm = b.norm();
            if norm.is_zero() {
                return a;
            }
            let (_, rem) = a.div_mod_with_norm(&b, &norm);
            a = b;
            b = rem;
        }
    }
}

impl<T: EisensteinBase> Div<EisensteinInt<T>> for EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = EisensteinInt<T>;

    /// Euclidean quotient, see [EisensteinInt::div_mod_floor]
    ///
    /// # Panics
    /// If `rhs` is zero.
    #[inline]
    fn div(self, rhs: EisensteinInt<T>) -> EisensteinInt<T> {
        match self.div_floor(&rhs) {
            Ok(quo) => quo,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<T: EisensteinBase> Rem<EisensteinInt<T>> for EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = EisensteinInt<T>;

    /// Euclidean remainder, see [EisensteinInt::div_mod_floor]
    ///
    /// # Panics
    /// If `rhs` is zero.
    #[inline]
    fn rem(self, rhs: EisensteinInt<T>) -> EisensteinInt<T> {
        match self.mod_floor(&rhs) {
            Ok(rem) => rem,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(a: i64, b: i64) -> EisensteinInt<i64> {
        EisensteinInt::new(a, b)
    }

    #[test]
    fn div_round_test() {
        assert_eq!(div_round::<i64>(&7, &2), 3); // ties go down
        assert_eq!(div_round::<i64>(&8, &3), 3);
        assert_eq!(div_round::<i64>(&7, &3), 2);
        assert_eq!(div_round::<i64>(&-7, &2), -4);
        assert_eq!(div_round::<i64>(&-8, &3), -3);
        assert_eq!(div_round::<i64>(&-6, &7), -1);
        assert_eq!(div_round::<i64>(&0, &5), 0);
    }

    #[test]
    fn div_floor_test() {
        assert_eq!(e(1, -1).div_floor(&e(1, -1)), Ok(e(1, 0)));
        assert_eq!(e(10, 0).div_floor(&e(5, 0)), Ok(e(2, 0)));
        assert_eq!(e(20, 0).div_floor(&e(-10, 0)), Ok(e(-2, 0)));
        assert_eq!(e(13, 0).div_floor(&e(5, 0)), Ok(e(3, 0)));
        assert_eq!(e(13, 0).mod_floor(&e(5, 0)), Ok(e(-2, 0)));
        assert_eq!(e(17, 0).div_mod_floor(&e(9, 0)), Ok((e(2, 0), e(-1, 0))));

        assert_eq!(e(10, 0) / e(5, 0), e(2, 0));
        assert_eq!(e(13, 0) % e(5, 0), e(-2, 0));
    }

    #[test]
    fn div_mod_identity_test() {
        let cases = [
            (e(3, 1), e(2, -1), e(1, 0)),
            (e(3, 21), e(-34, -1), e(1, 0)),
            (e(-3, 21), e(5, -1), e(1, 0)),
            (e(3, 2), e(5, 2), e(0, 1)),
        ];
        for (a, b, r) in cases.iter() {
            let d = a * b + *r;
            assert_eq!(d.div_mod_floor(a), Ok((*b, *r)));
        }

        let divisors = [e(2, -1), e(-3, -5), e(7, 0), e(0, -4), e(-6, 1)];
        for x in (-9..9).flat_map(|a| (-9..9).map(move |b| e(a, b))) {
            for d in divisors.iter() {
                let (q, r) = x.div_mod_floor(d).unwrap();
                assert_eq!(q * *d + r, x);
                assert!(r.norm() < d.norm(), "{} mod {} = {}", x, d, r);
            }
        }
    }

    #[test]
    fn brute_force_test() {
        let (a, b, r) = (e(3, 1), e(2, -1), e(1, 0));
        let d = a * b + r;
        assert_eq!(d.div_mod_brute_force(&a), Ok((b, r)));

        // rounding both coordinates isn't always optimal, the search can do better
        let (x, y) = (e(6, 0), e(4, 1));
        assert_eq!(x.rational_quotient(&y).unwrap(), (Ratio::new(18, 13), Ratio::new(-6, 13)));
        assert_eq!(x.div_mod_floor(&y), Ok((e(1, 0), e(2, -1))));
        assert_eq!(x.div_mod_brute_force(&y), Ok((e(1, -1), e(1, 2))));
        assert_eq!(e(2, -1).norm(), 7);
        assert_eq!(e(1, 2).norm(), 3);

        // 1 / 2: quotients 0 and 1 both leave a unit, the first one is kept
        assert_eq!(e(1, 0).div_mod_brute_force(&e(2, 0)), Ok((e(0, 0), e(1, 0))));
        assert_eq!(e(0, 0).div_mod_brute_force(&e(4, 1)), Ok((e(0, 0), e(0, 0))));
        assert_eq!(e(-7, 3).div_mod_brute_force(&e(1, 0)), Ok((e(-7, 3), e(0, 0))));
    }

    #[test]
    fn division_by_zero_test() {
        let zero = EisensteinInt::<i64>::zero();
        assert_eq!(e(3, 1).div_floor(&zero), Err(EisensteinError::DivisionByZero));
        assert_eq!(e(3, 1).mod_floor(&zero), Err(EisensteinError::DivisionByZero));
        assert_eq!(zero.div_mod_floor(&zero), Err(EisensteinError::DivisionByZero));
        assert_eq!(e(3, 1).div_mod_brute_force(&zero), Err(EisensteinError::DivisionByZero));
        assert!(e(3, 1).rational_quotient(&zero).is_err());
    }

    #[test]
    #[should_panic]
    fn div_operator_zero_test() {
        let _ = e(3, 1) / EisensteinInt::<i64>::zero();
    }

    #[test]
    #[should_panic]
    fn rem_operator_zero_test() {
        let _ = e(3, 1) % EisensteinInt::<i64>::zero();
    }

    #[test]
    fn is_multiple_of_test() {
        let p = e(2, 1);
        assert!((p * e(-4, 7)).is_multiple_of(&p));
        assert!(!(p * e(-4, 7) + 1).is_multiple_of(&p));
        assert!(e(3, 0).is_multiple_of(&e(1, -1))); // 3 = -ω²(1 - ω)²
        assert!(e(0, 0).is_multiple_of(&e(0, 0)));
        assert!(!e(1, 0).is_multiple_of(&e(0, 0)));
        assert!(e(0, 0).is_multiple_of(&e(5, 3)));
    }

    #[test]
    fn gcd_test() {
        assert_eq!(e(12, 0).gcd(&e(6, 0)), e(6, 0));
        assert_eq!(e(6, 0).gcd(&e(12, 0)), e(6, 0));

        let g = e(2, 1);
        let x = g * e(3, -1);
        let y = g * e(-1, 4);
        assert_eq!(x.gcd(&y).canonical(), g.canonical());

        // coprime numbers have a unit gcd
        assert!(e(2, 0).gcd(&e(1, -1)).is_unit());

        assert_eq!(e(5, -3).gcd(&EisensteinInt::<i64>::zero()), e(5, -3));
        assert!(EisensteinInt::<i64>::zero().gcd(&EisensteinInt::<i64>::zero()).is_zero());

        let x = e(-7, 4);
        assert_eq!(x.gcd(&x).norm(), x.norm());
    }
}
