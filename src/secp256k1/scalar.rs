//! secp256k1 scalar arithmetic (mod n)
//! n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use super::{to_bytes32, N};
use crate::error::{Error, Result};

// n/2 for checking if scalar is "high"
static N_HALF: Lazy<BigUint> = Lazy::new(|| &*N >> 1u32);

/// Scalar element for secp256k1 (private key domain)
/// n = order of the curve
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scalar(BigUint);

impl Scalar {
    /// Reduce an arbitrary integer modulo `n`.
    pub fn new(value: BigUint) -> Self {
        if value < *N {
            Self(value)
        } else {
            Self(value % &*N)
        }
    }

    #[inline]
    pub fn from_u64(val: u64) -> Self {
        Self::new(BigUint::from(val))
    }

    /// Interpret 32 big-endian bytes as a scalar, reducing mod n.
    #[inline]
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// Hash output as a scalar. Equivalent to `from_bytes`.
    #[inline]
    pub fn from_digest(digest: &[u8; 32]) -> Self {
        Self::from_bytes(digest)
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        to_bytes32(&self.0)
    }

    #[inline]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if scalar is "high" (s > n/2)
    pub fn is_high(&self) -> bool {
        self.0 > *N_HALF
    }

    pub fn pow(&self, exponent: &BigUint) -> Self {
        Self(self.0.modpow(exponent, &*N))
    }

    /// Inverse in the order-n scalar field, s^(n-2) mod n
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.pow(&(&*N - 2u32)))
    }
}

impl Add for &Scalar {
    type Output = Scalar;
    fn add(self, other: Self) -> Scalar {
        Scalar::new(&self.0 + &other.0)
    }
}

impl Sub for &Scalar {
    type Output = Scalar;
    fn sub(self, other: Self) -> Scalar {
        Scalar::new(&self.0 + &*N - &other.0)
    }
}

impl Mul for &Scalar {
    type Output = Scalar;
    fn mul(self, other: Self) -> Scalar {
        Scalar::new(&self.0 * &other.0)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        if self.is_zero() {
            self.clone()
        } else {
            Scalar(&*N - &self.0)
        }
    }
}

impl Add for Scalar {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl Sub for Scalar {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl Mul for Scalar {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl Neg for Scalar {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_add() {
        let a = Scalar::from_u64(1);
        let b = Scalar::from_u64(2);
        assert_eq!(a + b, Scalar::from_u64(3));
    }

    #[test]
    fn test_scalar_neg() {
        let a = Scalar::from_u64(1);
        let neg_a = -&a;
        assert!((a + neg_a).is_zero());
    }

    #[test]
    fn test_scalar_reduces() {
        assert!(Scalar::new((*N).clone()).is_zero());
        assert_eq!(Scalar::new(&*N + 5u32), Scalar::from_u64(5));
        assert!(Scalar::from_bytes(&[0xFF; 32]).value() < &*N);
        assert_eq!(
            Scalar::from_digest(&[0xFF; 32]),
            Scalar::new(BigUint::from_bytes_be(&[0xFF; 32]))
        );
    }

    #[test]
    fn test_scalar_sub_wraps() {
        let diff = Scalar::from_u64(2) - Scalar::from_u64(3);
        assert_eq!(diff, -Scalar::one());
    }

    #[test]
    fn test_scalar_invert() {
        let a = Scalar::from_u64(1234567890);
        let inv = a.invert().unwrap();
        assert_eq!(&a * &inv, Scalar::one());
        assert_eq!(Scalar::zero().invert().unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn test_is_high() {
        assert!(!Scalar::one().is_high());
        assert!((-Scalar::one()).is_high());
        assert!(!Scalar::new((*N_HALF).clone()).is_high());
        assert!(Scalar::new(&*N_HALF + 1u32).is_high());
    }
}
