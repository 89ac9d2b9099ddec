//! Hash functions
//!
//! Digests handed to ECDSA are 256-bit big-endian integers.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Double SHA-256, as used by Bitcoin for signature hashes
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);

    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

/// Interpret a digest as a big-endian unsigned integer
#[inline]
pub fn digest_to_int(digest: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(digest)
}

/// `z` for a message: `hash256(message)` as an integer
pub fn message_digest(message: &[u8]) -> BigUint {
    digest_to_int(&hash256(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash256_empty() {
        let expected =
            hex::decode("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456").unwrap();
        assert_eq!(&hash256(b"")[..], &expected[..]);
    }

    #[test]
    fn test_hash256_hello() {
        let expected =
            hex::decode("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50").unwrap();
        assert_eq!(&hash256(b"hello")[..], &expected[..]);
    }

    #[test]
    fn test_digest_is_big_endian() {
        let mut digest = [0u8; 32];
        digest[31] = 0x01;
        digest[30] = 0x02;
        assert_eq!(digest_to_int(&digest), BigUint::from(0x0201u32));
    }

    #[test]
    fn test_message_digest_matches_hash() {
        let z = message_digest(b"Programming bitcoin!");
        assert_eq!(z, BigUint::from_bytes_be(&hash256(b"Programming bitcoin!")));
    }
}
