//! ECDSA signature pair

use std::fmt;

use num_bigint::BigUint;

/// `(r, s)` as produced by signing. No wire encoding is attached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:064x},{:064x})", self.r, self.s)
    }
}
