//! secp256k1 elliptic curve point operations

use std::fmt;

use log::debug;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

use super::field::S256Field;
use super::scalar::Scalar;
use super::signature::Signature;
use super::{A, B, N};
use crate::error::{Error, Result};
use crate::point::{Coordinates, Point};

// Generator coordinates, little-endian 64-bit limbs
const GX: [u64; 4] = [
    0x59F2815B16F81798,
    0x029BFCDB2DCE28D9,
    0x55A06295CE870B07,
    0x79BE667EF9DCBBAC,
];

const GY: [u64; 4] = [
    0x9C47D08FFB10D4B8,
    0xFD17B448A6855419,
    0x5DA4FBFC0E1108A8,
    0x483ADA7726A3C465,
];

/// Generator point G
pub static G: Lazy<S256Point> = Lazy::new(|| {
    S256Point(Point::from_affine_unchecked(
        S256Field::from_limbs(GX),
        S256Field::from_limbs(GY),
        curve_a(),
        curve_b(),
    ))
});

fn curve_a() -> S256Field {
    S256Field::from_u64(A as u64)
}

fn curve_b() -> S256Field {
    S256Field::from_u64(B as u64)
}

/// Point on secp256k1, `y² = x³ + 7` over F_p
///
/// Wraps the generic [`Point`] with the curve parameters fixed and scalar
/// multipliers reduced modulo the group order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct S256Point(Point<S256Field>);

impl S256Point {
    pub fn new(x: S256Field, y: S256Field) -> Result<Self> {
        Point::new(x, y, curve_a(), curve_b()).map(Self)
    }

    /// Build from raw integer coordinates
    pub fn from_coordinates(x: &BigUint, y: &BigUint) -> Result<Self> {
        Self::new(S256Field::new(x.clone())?, S256Field::new(y.clone())?)
    }

    pub fn infinity() -> Self {
        Self(Point::infinity(curve_a(), curve_b()))
    }

    #[inline]
    pub fn generator() -> &'static Self {
        &G
    }

    /// Recover the point with the given x coordinate and y parity
    pub fn lift_x(x: S256Field, odd: bool) -> Result<Self> {
        let alpha = &(&x.sqr() * &x) + &curve_b();
        let beta = alpha.sqrt().ok_or_else(|| Error::NotOnCurve {
            x: x.to_string(),
            y: "?".to_string(),
        })?;
        let y = if beta.is_odd() == odd { beta } else { -beta };
        Self::new(x, y)
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.0.is_infinity()
    }

    #[inline]
    pub fn x(&self) -> Option<&S256Field> {
        self.0.x()
    }

    #[inline]
    pub fn y(&self) -> Option<&S256Field> {
        self.0.y()
    }

    #[inline]
    pub fn as_point(&self) -> &Point<S256Field> {
        &self.0
    }

    /// Point addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.0.add(&other.0).map(Self)
    }

    /// Point negation
    pub fn neg(&self) -> Self {
        match self.0.coordinates() {
            Coordinates::Infinity => self.clone(),
            Coordinates::Affine { x, y } => Self(Point::from_affine_unchecked(
                x.clone(),
                -y,
                curve_a(),
                curve_b(),
            )),
        }
    }

    /// `coefficient · self`, with the coefficient reduced mod n first
    pub fn mul(&self, coefficient: &BigUint) -> Result<Self> {
        let k = coefficient % &*N;
        self.0.scalar_mul(&k).map(Self)
    }

    /// Scalar multiplication by an already reduced scalar
    pub fn mul_scalar(&self, k: &Scalar) -> Result<Self> {
        self.0.scalar_mul(k.value()).map(Self)
    }

    /// ECDSA verification of digest `z` against this public point.
    ///
    /// Returns `false` for any signature that does not check out; never errors.
    pub fn verify(&self, z: &BigUint, sig: &Signature) -> bool {
        let s_inv = match Scalar::new(sig.s.clone()).invert() {
            Ok(inv) => inv,
            Err(_) => {
                debug!("rejecting signature: s is zero mod n");
                return false;
            }
        };
        let u = &Scalar::new(z.clone()) * &s_inv;
        let v = &Scalar::new(sig.r.clone()) * &s_inv;

        let total = G
            .mul_scalar(&u)
            .and_then(|ug| self.mul_scalar(&v).and_then(|vp| ug.add(&vp)));
        let total = match total {
            Ok(p) => p,
            Err(e) => {
                debug!("rejecting signature: {}", e);
                return false;
            }
        };

        match total.x() {
            Some(x) if *x.value() == sig.r => true,
            Some(_) => {
                debug!("rejecting signature: x(uG + vP) != r");
                false
            }
            None => {
                debug!("rejecting signature: uG + vP is the point at infinity");
                false
            }
        }
    }
}

impl fmt::Display for S256Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.coordinates() {
            Coordinates::Infinity => write!(f, "S256Point(infinity)"),
            Coordinates::Affine { x, y } => write!(f, "S256Point({},{})", x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secp256k1::P;

    fn hex(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
    }

    #[test]
    fn test_generator_on_curve() {
        // y² = x³ + 7
        let x = G.x().unwrap().value();
        let y = G.y().unwrap().value();
        let lhs = y.modpow(&BigUint::from(2u32), &*P);
        let rhs = (x.modpow(&BigUint::from(3u32), &*P) + 7u32) % &*P;
        assert_eq!(lhs, rhs);
        assert_eq!(
            *x,
            hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
        );

        let rebuilt = S256Point::from_coordinates(x, y).unwrap();
        assert_eq!(rebuilt, *G);
    }

    #[test]
    fn test_generator_limbs() {
        let g = S256Point::generator();
        assert_eq!(
            *g.x().unwrap().value(),
            hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798")
        );
        assert_eq!(
            *g.y().unwrap().value(),
            hex("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8")
        );
        assert!(S256Point::new(g.x().unwrap().clone(), g.y().unwrap().clone()).is_ok());
    }

    #[test]
    fn test_point_double() {
        let p2 = G.mul(&BigUint::from(2u32)).unwrap();
        let p2_add = G.add(&G).unwrap();
        assert_eq!(p2, p2_add);
        assert_eq!(
            *p2.x().unwrap().value(),
            hex("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5")
        );
    }

    #[test]
    fn test_point_add_neg() {
        let neg_g = G.neg();
        let sum = G.add(&neg_g).unwrap();
        assert!(sum.is_infinity());
    }

    #[test]
    fn test_scalar_mul_one() {
        let p = G.mul(&BigUint::from(1u32)).unwrap();
        assert_eq!(p, *G);
        assert_eq!(G.mul_scalar(&Scalar::one()).unwrap(), *G);
    }

    #[test]
    fn test_order_annihilates_generator() {
        // Reduction mod n makes this trivially infinity; run the generic path too.
        assert!(G.mul(&N).unwrap().is_infinity());
        assert!(G.as_point().scalar_mul(&N).unwrap().is_infinity());
    }

    #[test]
    fn test_mul_reduces_mod_n() {
        let k = BigUint::from(12345u32);
        let wrapped = &k + &*N;
        assert_eq!(G.mul(&wrapped).unwrap(), G.mul(&k).unwrap());
    }

    #[test]
    fn test_not_on_curve() {
        let err = S256Point::new(S256Field::from_u64(1), S256Field::from_u64(1)).unwrap_err();
        assert!(matches!(err, Error::NotOnCurve { .. }));
    }

    #[test]
    fn test_lift_x() {
        let x = G.x().unwrap().clone();
        let odd = G.y().unwrap().is_odd();
        assert_eq!(S256Point::lift_x(x.clone(), odd).unwrap(), *G);
        assert_eq!(S256Point::lift_x(x, !odd).unwrap(), G.neg());
    }

    #[test]
    fn test_infinity_display() {
        assert_eq!(S256Point::infinity().to_string(), "S256Point(infinity)");
        assert!(G.to_string().starts_with("S256Point(79be667e"));
    }
}
