//! Implementation of the Eisenstein integer value type and its ring arithmetic

use super::EisensteinBase;
use core::cmp::Ordering;
use core::ops::{Add, Mul, Neg, Sub};
use num_integer::Integer;
use num_traits::{FromPrimitive, One, RefNum, Signed, ToPrimitive, Zero};
use std::fmt;

/// An Eisenstein integer represented as `a + bω`, where `ω² + ω + 1 = 0`.
///
/// The value is never normalized: equality is structural, so the six associates
/// of a number (see [EisensteinInt::associates]) are distinct values. Use
/// [EisensteinInt::canonical] to compare numbers up to a unit factor.
#[derive(Hash, Clone, Debug, Copy, PartialEq, Eq)]
pub struct EisensteinInt<T> {
    pub(super) a: T,
    pub(super) b: T,
}

impl<T> EisensteinInt<T> {
    /// Create the Eisenstein integer `a + bω`
    #[inline]
    pub const fn new(a: T, b: T) -> Self {
        EisensteinInt { a, b }
    }

    /// Get return-only references to the components `(a, b)`
    #[inline]
    pub const fn parts(&self) -> (&T, &T) {
        (&self.a, &self.b)
    }

    /// The rational coefficient `a`
    #[inline]
    pub const fn real(&self) -> &T {
        &self.a
    }

    /// The coefficient `b` of `ω`
    #[inline]
    pub const fn imag(&self) -> &T {
        &self.b
    }
}

impl<T: Integer> EisensteinInt<T> {
    /// Determine if the number is a plain integer (i.e. `b = 0`)
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.b.is_zero()
    }
}

impl<T: Integer> From<T> for EisensteinInt<T> {
    /// Lift a plain integer `n` into the ring as `n + 0ω`
    #[inline]
    fn from(t: T) -> Self {
        EisensteinInt {
            a: t,
            b: T::zero(),
        }
    }
}

impl<T> Into<(T, T)> for EisensteinInt<T> {
    /// Deconstruct `a + bω` into tuple `(a, b)`
    fn into(self) -> (T, T) {
        (self.a, self.b)
    }
}

impl<T: EisensteinBase> EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Get the norm `a² - ab + b²` of the number.
    ///
    /// The norm is the squared length of the number in the complex plane. It's
    /// never negative, zero only for the zero element, and multiplicative:
    /// `(x * y).norm() == x.norm() * y.norm()`.
    #[inline]
    pub fn norm(&self) -> T {
        &self.a * &self.a - &self.a * &self.b + &self.b * &self.b
    }

    /// Return the complex conjugate `(a - b) - bω`.
    ///
    /// A number times its conjugate is the plain integer equal to its norm.
    #[inline]
    pub fn conj(&self) -> Self {
        EisensteinInt::new(&self.a - &self.b, T::zero() - &self.b)
    }

    /// Compare two numbers by their norms.
    ///
    /// This is a total preorder, not an order: distinct numbers (associates in
    /// particular) can have the same norm and compare as [Ordering::Equal] here.
    /// Sorting with it is not a canonical ordering of the ring.
    #[inline]
    pub fn cmp_norm(&self, other: &Self) -> Ordering {
        self.norm().cmp(&other.norm())
    }
}

macro_rules! arith_impl {
    (impl $imp:ident, $method:ident) => {
        // componentwise on (a, b)
        impl<T: EisensteinBase> $imp<EisensteinInt<T>> for EisensteinInt<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = EisensteinInt<T>;
            #[inline]
            fn $method(self, rhs: EisensteinInt<T>) -> EisensteinInt<T> {
                EisensteinInt::new(self.a.$method(rhs.a), self.b.$method(rhs.b))
            }
        }

        impl<'a, 'b, T: EisensteinBase> $imp<&'b EisensteinInt<T>> for &'a EisensteinInt<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = EisensteinInt<T>;
            #[inline]
            fn $method(self, rhs: &'b EisensteinInt<T>) -> EisensteinInt<T> {
                EisensteinInt::new($imp::$method(&self.a, &rhs.a), $imp::$method(&self.b, &rhs.b))
            }
        }

        // the plain integer operand is lifted to n + 0ω
        impl<T: EisensteinBase> $imp<T> for EisensteinInt<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = EisensteinInt<T>;
            #[inline]
            fn $method(self, rhs: T) -> EisensteinInt<T> {
                EisensteinInt::new(self.a.$method(rhs), self.b)
            }
        }
    };
}

arith_impl!(impl Add, add);
arith_impl!(impl Sub, sub);

impl<'a, 'b, T: EisensteinBase> Mul<&'b EisensteinInt<T>> for &'a EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = EisensteinInt<T>;
    #[inline]
    fn mul(self, rhs: &'b EisensteinInt<T>) -> EisensteinInt<T> {
        // (a + bω)(c + dω) = (ac - bd) + (ad + b(c - d))ω, using ω² = -1 - ω
        let (a, b) = (&self.a, &self.b);
        let (c, d) = (&rhs.a, &rhs.b);
        EisensteinInt::new(a * c - b * d, a * d + b * (c - d))
    }
}

impl<T: EisensteinBase> Mul<EisensteinInt<T>> for EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = EisensteinInt<T>;
    #[inline]
    fn mul(self, rhs: EisensteinInt<T>) -> EisensteinInt<T> {
        &self * &rhs
    }
}

impl<T: EisensteinBase> Mul<T> for EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = EisensteinInt<T>;
    #[inline]
    fn mul(self, rhs: T) -> EisensteinInt<T> {
        EisensteinInt::new(self.a * &rhs, self.b * rhs)
    }
}

impl<T: EisensteinBase> Neg for EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Output = EisensteinInt<T>;
    #[inline]
    fn neg(self) -> EisensteinInt<T> {
        EisensteinInt::new(-self.a, -self.b)
    }
}

impl<T: EisensteinBase> Zero for EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn zero() -> Self {
        EisensteinInt::new(T::zero(), T::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }
}

impl<T: EisensteinBase> One for EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn one() -> Self {
        EisensteinInt::new(T::one(), T::zero())
    }
}

/// Numbers are ordered by their norms, `x < y` iff `x.norm() < y.norm()`,
/// and likewise for `<=`, `>` and `>=`.
///
/// This collapses the norm preorder into a total order: two different numbers
/// with the same norm (associates in particular) compare as [Ordering::Equal]
/// although they are not `==`. The order is a convenience for comparisons and
/// carries no algebraic meaning, so sorting with it is not a canonical ordering
/// of the ring.
impl<T: EisensteinBase> PartialOrd for EisensteinInt<T>
where
    for<'r> &'r T: RefNum<T>,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_norm(other))
    }
}

impl<T: Integer + Signed + fmt::Display> fmt::Display for EisensteinInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b_is_mone = self.b == -T::one();
        match (self.a.is_zero(), self.b.is_zero(), self.b.is_one(), b_is_mone) {
            (_, true, _, _) => write!(f, "{}", self.a),
            (true, false, true, _) => write!(f, "ω"),
            (true, false, false, true) => write!(f, "-ω"),
            (true, false, false, false) => write!(f, "{}ω", self.b),
            (false, false, true, _) => write!(f, "{} + ω", self.a),
            (false, false, false, true) => write!(f, "{} - ω", self.a),
            (false, false, false, false) => {
                if self.b.is_negative() {
                    write!(f, "{} - {}ω", self.a, self.b.abs())
                } else {
                    write!(f, "{} + {}ω", self.a, self.b)
                }
            }
        }
    }
}

impl<T: Integer + FromPrimitive> FromPrimitive for EisensteinInt<T> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Self::from)
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Self::from)
    }
}

impl<T: Integer + ToPrimitive> ToPrimitive for EisensteinInt<T> {
    /// Only plain integers (`b = 0`) can be converted
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        if self.b.is_zero() {
            self.a.to_i64()
        } else {
            None
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        if self.b.is_zero() {
            self.a.to_u64()
        } else {
            None
        }
    }
}

#[cfg(feature = "num-complex")]
mod complex {
    use super::*;
    use num_complex::{Complex32, Complex64};

    impl<T: Integer + ToPrimitive> EisensteinInt<T> {
        /// Embed the number into the complex plane, `a + bω ↦ (a - b/2) + (b√3/2)i`
        pub fn to_complex64(&self) -> Option<Complex64> {
            let a = self.a.to_f64()?;
            let b = self.b.to_f64()?;
            Some(Complex64::new(a - b / 2., b * 3f64.sqrt() / 2.))
        }

        pub fn to_complex32(&self) -> Option<Complex32> {
            let complex = self.to_complex64()?;
            Some(Complex32::new(complex.re.to_f32()?, complex.im.to_f32()?))
        }
    }
}
