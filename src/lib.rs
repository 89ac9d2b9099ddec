//! s256-ecc: prime field and elliptic curve arithmetic
//!
//! Generic `F_p` field elements and short Weierstrass points, specialized to
//! secp256k1 for key derivation, ECDSA signing and verification.

pub mod error;
pub mod field;
pub mod hash;
pub mod point;
pub mod report;
pub mod secp256k1;


pub use error::{Error, Result};
pub use field::FieldElement;
pub use point::{Coordinate, Coordinates, Point};
pub use secp256k1::{PrivateKey, S256Field, S256Point, Scalar, Signature, G, N, P};
