//! secp256k1 elliptic curve cryptography
//!
//! Fixes the coordinate prime `P`, the curve `y² = x³ + 7`, the generator `G`
//! and the group order `N` on top of the generic field and point code.

pub mod field;
pub mod point;
pub mod private_key;
pub mod scalar;
pub mod signature;

pub use field::S256Field;
pub use point::{S256Point, G};
pub use private_key::PrivateKey;
pub use scalar::Scalar;
pub use signature::Signature;

use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;

/// Curve coefficient `a`
pub const A: u32 = 0;
/// Curve coefficient `b`
pub const B: u32 = 7;

// Field prime p = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F
const P_LIMBS: [u64; 4] = [
    0xFFFFFFFEFFFFFC2F,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
];

// Curve order n
const N_LIMBS: [u64; 4] = [
    0xBFD25E8CD0364141,
    0xBAAEDCE6AF48A03B,
    0xFFFFFFFFFFFFFFFE,
    0xFFFFFFFFFFFFFFFF,
];

/// Prime field p = 2^256 - 2^32 - 977
pub static P: Lazy<BigUint> = Lazy::new(|| from_limbs(P_LIMBS));

/// Order of the group generated by `G`
pub static N: Lazy<BigUint> = Lazy::new(|| from_limbs(N_LIMBS));

/// Assemble a 256-bit integer from little-endian 64-bit limbs.
pub(crate) fn from_limbs(d: [u64; 4]) -> BigUint {
    d.iter()
        .rev()
        .fold(BigUint::zero(), |acc, &limb| (acc << 64u32) | BigUint::from(limb))
}

/// Big-endian 32-byte encoding of a value below 2^256.
pub(crate) fn to_bytes32(v: &BigUint) -> [u8; 32] {
    let mut out = [0u8; 32];
    let bytes = v.to_bytes_be();
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_prime_value() {
        let expected = (BigUint::from(1u32) << 256u32) - (BigUint::from(1u32) << 32u32) - 977u32;
        assert_eq!(*P, expected);
    }

    #[test]
    fn test_order_value() {
        let expected = BigUint::parse_bytes(
            b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
            16,
        )
        .unwrap();
        assert_eq!(*N, expected);
    }

    #[test]
    fn test_prime_hex() {
        let expected = BigUint::parse_bytes(
            b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
            16,
        )
        .unwrap();
        assert_eq!(from_limbs(P_LIMBS), expected);
        assert_eq!(&*P % 4u32, BigUint::from(3u32));
    }

    #[test]
    fn test_bytes_padding() {
        let bytes = to_bytes32(&BigUint::from(0x3039u32));
        assert_eq!(&bytes[..30], &[0u8; 30]);
        assert_eq!(&bytes[30..], &[0x30, 0x39]);
        assert_eq!(to_bytes32(&BigUint::zero()), [0u8; 32]);
    }
}
