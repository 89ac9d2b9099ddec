//! Prime field elements over an arbitrary modulus
//!
//! Values are kept in `[0, prime)`. Binary operations check that both
//! operands live in the same field and fail with
//! [`Error::IncompatibleField`] otherwise.

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Residue modulo a prime.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    prime: BigUint,
}

impl FieldElement {
    /// Build `value mod prime`, rejecting values outside `[0, prime)`.
    pub fn new(value: impl Into<BigInt>, prime: impl Into<BigUint>) -> Result<Self> {
        let value = value.into();
        let prime = prime.into();
        if prime < BigUint::from(2u8) {
            return Err(Error::InvalidModulus(prime));
        }
        match value.to_biguint() {
            Some(v) if v < prime => Ok(Self { value: v, prime }),
            _ => Err(Error::OutOfRange { value, prime }),
        }
    }

    /// Caller guarantees `value < prime` and `prime >= 2`.
    pub(crate) fn from_reduced(value: BigUint, prime: BigUint) -> Self {
        Self { value, prime }
    }

    pub fn zero(prime: impl Into<BigUint>) -> Result<Self> {
        Self::new(0u8, prime)
    }

    pub fn one(prime: impl Into<BigUint>) -> Result<Self> {
        Self::new(1u8, prime)
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    // Results of arithmetic are already reduced.
    fn with_value(&self, value: BigUint) -> Self {
        Self {
            value,
            prime: self.prime.clone(),
        }
    }

    fn check_field(&self, other: &Self) -> Result<()> {
        if self.prime != other.prime {
            return Err(Error::IncompatibleField {
                left: self.prime.clone(),
                right: other.prime.clone(),
            });
        }
        Ok(())
    }

    /// Modular addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_field(other)?;
        Ok(self.with_value((&self.value + &other.value) % &self.prime))
    }

    /// Modular subtraction; `prime` is added first so the result stays non-negative
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_field(other)?;
        Ok(self.with_value((&self.value + &self.prime - &other.value) % &self.prime))
    }

    /// Modular multiplication
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_field(other)?;
        Ok(self.with_value((&self.value * &other.value) % &self.prime))
    }

    /// Multiply by a small integer constant
    pub fn scale(&self, k: u32) -> Self {
        self.with_value((&self.value * k) % &self.prime)
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            self.with_value(&self.prime - &self.value)
        }
    }

    /// Exponentiation with a signed exponent.
    ///
    /// The exponent is reduced modulo `prime - 1` (Fermat), which makes
    /// negative exponents yield inverse powers. Zero raised to a negative
    /// power fails with [`Error::DivisionByZero`].
    pub fn pow(&self, exponent: &BigInt) -> Result<Self> {
        if self.is_zero() {
            return match exponent.sign() {
                Sign::Minus => Err(Error::DivisionByZero),
                Sign::NoSign => Ok(self.with_value(BigUint::one())),
                Sign::Plus => Ok(self.clone()),
            };
        }
        let order = BigInt::from(&self.prime - 1u8);
        let reduced = exponent.mod_floor(&order);
        // mod_floor by a positive modulus is never negative
        let e = reduced.magnitude();
        Ok(self.with_value(self.value.modpow(e, &self.prime)))
    }

    /// Multiplicative inverse, `value^(prime - 2)`
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let e = &self.prime - 2u8;
        Ok(self.with_value(self.value.modpow(&e, &self.prime)))
    }

    /// Modular division through the Fermat inverse of `other`
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.check_field(other)?;
        let inv = other.inverse()?;
        self.mul(&inv)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(v: i64, p: u64) -> FieldElement {
        FieldElement::new(v, p).unwrap()
    }

    #[test]
    fn test_eq() {
        let a = fe(7, 13);
        let b = fe(6, 13);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(fe(192, 223), fe(192, 223));
        assert_ne!(fe(3, 13), fe(3, 17));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            FieldElement::new(13, 13u32),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            FieldElement::new(-1, 13u32),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            FieldElement::new(0, 1u32),
            Err(Error::InvalidModulus(_))
        ));
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(fe(7, 13).add(&fe(12, 13)).unwrap(), fe(6, 13));
        assert_eq!(fe(11, 13).sub(&fe(9, 13)).unwrap(), fe(2, 13));
        assert_eq!(fe(2, 13).sub(&fe(9, 13)).unwrap(), fe(6, 13));
    }

    #[test]
    fn test_mul() {
        assert_eq!(fe(3, 13).mul(&fe(4, 13)).unwrap(), fe(12, 13));
        assert_eq!(fe(3, 13).mul(&fe(5, 13)).unwrap(), fe(2, 13));
        assert_eq!(fe(3, 13).mul(&fe(12, 13)).unwrap(), fe(10, 13));
    }

    #[test]
    fn test_incompatible_fields() {
        let err = fe(1, 13).add(&fe(1, 17)).unwrap_err();
        assert!(matches!(err, Error::IncompatibleField { .. }));
        assert!(fe(1, 13).sub(&fe(1, 17)).is_err());
        assert!(fe(1, 13).mul(&fe(1, 17)).is_err());
        assert!(fe(1, 13).div(&fe(1, 17)).is_err());
    }

    #[test]
    fn test_pow() {
        assert_eq!(fe(3, 13).pow(&BigInt::from(2)).unwrap(), fe(9, 13));
        assert_eq!(fe(3, 13).pow(&BigInt::from(-4)).unwrap(), fe(9, 13));
        assert_eq!(fe(7, 13).pow(&BigInt::from(-3)).unwrap(), fe(8, 13));
        assert_eq!(fe(17, 31).pow(&BigInt::from(3)).unwrap(), fe(15, 31));
        assert_eq!(
            fe(5, 31)
                .pow(&BigInt::from(5))
                .unwrap()
                .mul(&fe(18, 31))
                .unwrap(),
            fe(16, 31)
        );
    }

    #[test]
    fn test_pow_zero_base() {
        let zero = fe(0, 13);
        assert_eq!(zero.pow(&BigInt::from(12)).unwrap(), zero);
        assert_eq!(zero.pow(&BigInt::from(0)).unwrap(), fe(1, 13));
        assert_eq!(
            zero.pow(&BigInt::from(-1)).unwrap_err(),
            Error::DivisionByZero
        );
    }

    #[test]
    fn test_div() {
        assert_eq!(fe(2, 13).div(&fe(7, 13)).unwrap(), fe(4, 13));
        assert_eq!(fe(3, 31).div(&fe(24, 31)).unwrap(), fe(4, 31));
        assert_eq!(fe(5, 13).div(&fe(0, 13)).unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn test_neg_and_scale() {
        let x = fe(5, 13);
        assert!(x.add(&x.neg()).unwrap().is_zero());
        assert_eq!(fe(0, 13).neg(), fe(0, 13));
        assert_eq!(x.scale(3), fe(2, 13));
    }

    #[test]
    fn test_display() {
        assert_eq!(fe(7, 13).to_string(), "FieldElement_13(7)");
    }
}
