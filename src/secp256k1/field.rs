//! secp256k1 field element arithmetic (mod p)
//! p = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use super::{from_limbs, to_bytes32, P};
use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::point::Coordinate;

// (p + 1) / 4, valid because p ≡ 3 (mod 4)
static SQRT_EXP: Lazy<BigUint> = Lazy::new(|| (&*P + 1u32) >> 2u32);

/// Prime field element for secp256k1
/// p = 2^256 - 2^32 - 977
///
/// The modulus is implied, so arithmetic never mixes fields and the
/// operators are infallible. Only inversion of zero can fail.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct S256Field(BigUint);

impl S256Field {
    pub fn new(value: BigUint) -> Result<Self> {
        if value >= *P {
            return Err(Error::OutOfRange {
                value: value.into(),
                prime: (*P).clone(),
            });
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn from_u64(val: u64) -> Self {
        Self(BigUint::from(val))
    }

    #[inline]
    pub(crate) fn from_limbs(d: [u64; 4]) -> Self {
        Self(from_limbs(d))
    }

    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes))
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

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    /// Modular square
    #[inline]
    pub fn sqr(&self) -> Self {
        self * self
    }

    pub fn pow(&self, exponent: &BigUint) -> Self {
        Self(self.0.modpow(exponent, &*P))
    }

    /// Modular inverse using Fermat's little theorem
    /// a^(-1) = a^(p-2) mod p
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.pow(&(&*P - 2u32)))
    }

    /// Get square root if exists (returns None if not a quadratic residue)
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow(&SQRT_EXP);
        if root.sqr() == *self {
            Some(root)
        } else {
            None
        }
    }

    /// The same value as a generic field element
    pub fn to_field_element(&self) -> FieldElement {
        FieldElement::from(self.clone())
    }
}

impl From<S256Field> for FieldElement {
    fn from(v: S256Field) -> Self {
        FieldElement::from_reduced(v.0, (*P).clone())
    }
}

impl TryFrom<FieldElement> for S256Field {
    type Error = Error;

    fn try_from(fe: FieldElement) -> Result<Self> {
        if *fe.prime() != *P {
            return Err(Error::IncompatibleField {
                left: fe.prime().clone(),
                right: (*P).clone(),
            });
        }
        Ok(Self(fe.value().clone()))
    }
}

impl Add for &S256Field {
    type Output = S256Field;
    fn add(self, other: Self) -> S256Field {
        S256Field((&self.0 + &other.0) % &*P)
    }
}

impl Sub for &S256Field {
    type Output = S256Field;
    fn sub(self, other: Self) -> S256Field {
        S256Field((&self.0 + &*P - &other.0) % &*P)
    }
}

impl Mul for &S256Field {
    type Output = S256Field;
    fn mul(self, other: Self) -> S256Field {
        S256Field((&self.0 * &other.0) % &*P)
    }
}

impl Neg for &S256Field {
    type Output = S256Field;
    fn neg(self) -> S256Field {
        if self.is_zero() {
            self.clone()
        } else {
            S256Field(&*P - &self.0)
        }
    }
}

impl Add for S256Field {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl Sub for S256Field {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl Mul for S256Field {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl Neg for S256Field {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

impl Coordinate for S256Field {
    fn try_add(&self, rhs: &Self) -> Result<Self> {
        Ok(self + rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(self - rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self> {
        Ok(self * rhs)
    }

    fn try_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self * &rhs.invert()?)
    }

    fn scale(&self, k: u32) -> Self {
        Self((&self.0 * k) % &*P)
    }

    fn is_zero(&self) -> bool {
        S256Field::is_zero(self)
    }

    fn square(&self) -> Result<Self> {
        Ok(self.sqr())
    }
}

impl fmt::Display for S256Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064x}", self.0)
    }
}
