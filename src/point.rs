//! Short Weierstrass curve points, `y² = x³ + a·x + b`
//!
//! [`Point`] is generic over its coordinate type so the same group law runs
//! on prime-field coordinates, on the fixed secp256k1 field, and on plain
//! integers for textbook curves.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::field::FieldElement;

/// Arithmetic a coordinate type must provide for the group law.
pub trait Coordinate: Clone + PartialEq + fmt::Debug + fmt::Display {
    fn try_add(&self, rhs: &Self) -> Result<Self>;
    fn try_sub(&self, rhs: &Self) -> Result<Self>;
    fn try_mul(&self, rhs: &Self) -> Result<Self>;
    fn try_div(&self, rhs: &Self) -> Result<Self>;

    /// `k·self` for a small integer constant.
    fn scale(&self, k: u32) -> Self;

    fn is_zero(&self) -> bool;

    fn square(&self) -> Result<Self> {
        self.try_mul(self)
    }
}

impl Coordinate for FieldElement {
    fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.add(rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.sub(rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self> {
        self.mul(rhs)
    }

    fn try_div(&self, rhs: &Self) -> Result<Self> {
        self.div(rhs)
    }

    fn scale(&self, k: u32) -> Self {
        FieldElement::scale(self, k)
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }
}

/// Integer coordinates. Slopes must divide exactly.
impl Coordinate for BigInt {
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
        if Zero::is_zero(rhs) {
            return Err(Error::DivisionByZero);
        }
        let (q, r) = self.div_rem(rhs);
        if !Zero::is_zero(&r) {
            return Err(Error::InexactDivision {
                numerator: self.to_string(),
                denominator: rhs.to_string(),
            });
        }
        Ok(q)
    }

    fn scale(&self, k: u32) -> Self {
        self * k
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

/// Affine coordinates or the identity element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Coordinates<F> {
    Infinity,
    Affine { x: F, y: F },
}

/// Point on the curve with parameters `a`, `b`.
///
/// Two points are equal iff their coordinates and curve parameters match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point<F> {
    coords: Coordinates<F>,
    a: F,
    b: F,
}

impl<F: Coordinate> Point<F> {
    /// Construct an affine point, checking `y² == x³ + a·x + b`.
    pub fn new(x: F, y: F, a: F, b: F) -> Result<Self> {
        let lhs = y.square()?;
        let rhs = x.square()?.try_mul(&x)?.try_add(&a.try_mul(&x)?)?.try_add(&b)?;
        if lhs != rhs {
            return Err(Error::NotOnCurve {
                x: x.to_string(),
                y: y.to_string(),
            });
        }
        Ok(Self {
            coords: Coordinates::Affine { x, y },
            a,
            b,
        })
    }

    /// Affine point whose membership the caller has already established.
    pub(crate) fn from_affine_unchecked(x: F, y: F, a: F, b: F) -> Self {
        Self {
            coords: Coordinates::Affine { x, y },
            a,
            b,
        }
    }

    /// Identity element of the curve `a`, `b`. No membership check applies.
    pub fn infinity(a: F, b: F) -> Self {
        Self {
            coords: Coordinates::Infinity,
            a,
            b,
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self.coords, Coordinates::Infinity)
    }

    #[inline]
    pub fn coordinates(&self) -> &Coordinates<F> {
        &self.coords
    }

    pub fn x(&self) -> Option<&F> {
        match &self.coords {
            Coordinates::Affine { x, .. } => Some(x),
            Coordinates::Infinity => None,
        }
    }

    pub fn y(&self) -> Option<&F> {
        match &self.coords {
            Coordinates::Affine { y, .. } => Some(y),
            Coordinates::Infinity => None,
        }
    }

    #[inline]
    pub fn a(&self) -> &F {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &F {
        &self.b
    }

    fn same_curve(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }

    fn affine(&self, x: F, y: F) -> Self {
        Self {
            coords: Coordinates::Affine { x, y },
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }

    fn identity(&self) -> Self {
        Self::infinity(self.a.clone(), self.b.clone())
    }

    /// Reflection over the x-axis
    pub fn neg(&self) -> Result<Self> {
        match &self.coords {
            Coordinates::Infinity => Ok(self.clone()),
            Coordinates::Affine { x, y } => {
                let zero = y.try_sub(y)?;
                Ok(self.affine(x.clone(), zero.try_sub(y)?))
            }
        }
    }

    /// Group law.
    ///
    /// Cases are tested in order: identity operands, vertical line through
    /// inverse points, chord through distinct x, vertical tangent, tangent.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.same_curve(other) {
            return Err(Error::DifferentCurve);
        }

        let (x1, y1, x2, y2) = match (&self.coords, &other.coords) {
            (Coordinates::Infinity, _) => return Ok(other.clone()),
            (_, Coordinates::Infinity) => return Ok(self.clone()),
            (Coordinates::Affine { x: x1, y: y1 }, Coordinates::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        if x1 == x2 && y1 != y2 {
            return Ok(self.identity());
        }

        if x1 != x2 {
            // s = (y1 - y2) / (x1 - x2)
            let s = y1.try_sub(y2)?.try_div(&x1.try_sub(x2)?)?;
            // x3 = s² - x1 - x2
            let x3 = s.square()?.try_sub(x1)?.try_sub(x2)?;
            // y3 = s(x1 - x3) - y1
            let y3 = s.try_mul(&x1.try_sub(&x3)?)?.try_sub(y1)?;
            return Ok(self.affine(x3, y3));
        }

        // Same point from here on.
        if y1.is_zero() {
            return Ok(self.identity());
        }

        // s = (3x² + a) / 2y
        let s = x1
            .square()?
            .scale(3)
            .try_add(&self.a)?
            .try_div(&y1.scale(2))?;
        // x3 = s² - 2x
        let x3 = s.square()?.try_sub(&x1.scale(2))?;
        // y3 = s(x - x3) - y
        let y3 = s.try_mul(&x1.try_sub(&x3)?)?.try_sub(y1)?;
        Ok(self.affine(x3, y3))
    }

    /// Double-and-add scalar multiplication, `coefficient · self`.
    pub fn scalar_mul(&self, coefficient: &BigUint) -> Result<Self> {
        let mut result = self.identity();
        let mut current = self.clone();
        let mut k = coefficient.clone();

        while !k.is_zero() {
            if k.bit(0) {
                result = result.add(&current)?;
            }
            k >>= 1;
            if !k.is_zero() {
                current = current.add(&current)?;
            }
        }

        Ok(result)
    }
}

impl<F: fmt::Display> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            Coordinates::Infinity => write!(f, "Point(infinity)"),
            Coordinates::Affine { x, y } => {
                write!(f, "Point({},{})_{}_{}", x, y, self.a, self.b)
            }
        }
    }
}
