use core::convert::TryFrom;
use num_prime::nt_funcs::is_prime64;

#[cfg(feature = "num-bigint")]
use num_bigint::BigInt;

/// Primality of a plain (rational) integer.
///
/// The Eisenstein primality test reduces to this question about a coefficient
/// or the norm. Implementations must be deterministic; negative numbers, zero
/// and one are never prime.
pub trait IntegerPrimality {
    fn is_prime_integer(&self) -> bool;
}

macro_rules! impl_primitive_primality {
    ($($T:ty),*) => {$(
        impl IntegerPrimality for $T {
            #[inline]
            fn is_prime_integer(&self) -> bool {
                match u64::try_from(*self) {
                    Ok(n) => is_prime64(n),
                    Err(_) => false, // negative
                }
            }
        }
    )*};
}
impl_primitive_primality!(i8, i16, i32, i64, isize);

impl IntegerPrimality for i128 {
    #[inline]
    fn is_prime_integer(&self) -> bool {
        match u128::try_from(*self) {
            Ok(n) => num_prime::nt_funcs::is_prime::<u128>(&n, None).probably(),
            Err(_) => false, // negative
        }
    }
}

#[cfg(feature = "num-bigint")]
impl IntegerPrimality for BigInt {
    fn is_prime_integer(&self) -> bool {
        match self.to_biguint() {
            Some(n) => num_prime::nt_funcs::is_prime::<num_bigint::BigUint>(&n, None).probably(),
            None => false,
        }
    }
}
