//! Error type shared by field, curve and signature operations

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Failures raised by field and curve arithmetic.
///
/// Every variant describes a single invalid operation; nothing is retried
/// and no partially built value escapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("value {value} not in field range 0 to {prime}")]
    OutOfRange { value: BigInt, prime: BigUint },

    #[error("modulus {0} must be at least 2")]
    InvalidModulus(BigUint),

    #[error("cannot combine elements of F_{left} and F_{right}")]
    IncompatibleField { left: BigUint, right: BigUint },

    #[error("division by zero")]
    DivisionByZero,

    #[error("({x}, {y}) is not on the curve")]
    NotOnCurve { x: String, y: String },

    #[error("points are not on the same curve")]
    DifferentCurve,

    /// Integer coordinates produced a slope with a remainder.
    #[error("{numerator} is not divisible by {denominator}")]
    InexactDivision { numerator: String, denominator: String },

    #[error("scalar is zero modulo the group order")]
    ZeroScalar,
}

pub type Result<T> = std::result::Result<T, Error>;
