//! Printable results for the command line tool

use serde::{Deserialize, Serialize};

use crate::secp256k1::{PrivateKey, S256Point, Signature};

fn point_hex(point: &S256Point) -> (String, String) {
    match (point.x(), point.y()) {
        (Some(x), Some(y)) => (x.to_string(), y.to_string()),
        _ => ("infinity".to_string(), "infinity".to_string()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyReport {
    pub private_key_hex: String,
    pub public_x_hex: String,
    pub public_y_hex: String,
}

impl KeyReport {
    pub fn from_key(key: &PrivateKey) -> Self {
        let (public_x_hex, public_y_hex) = point_hex(key.public_point());
        Self {
            private_key_hex: key.to_hex(),
            public_x_hex,
            public_y_hex,
        }
    }
}

impl std::fmt::Display for KeyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"Private Key (HEX): 0x{}
Public Key X:      0x{}
Public Key Y:      0x{}"#,
            self.private_key_hex, self.public_x_hex, self.public_y_hex
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureReport {
    pub z_hex: String,
    pub r_hex: String,
    pub s_hex: String,
    pub public_x_hex: String,
    pub public_y_hex: String,
}

impl SignatureReport {
    pub fn new(key: &PrivateKey, z: &num_bigint::BigUint, sig: &Signature) -> Self {
        let (public_x_hex, public_y_hex) = point_hex(key.public_point());
        Self {
            z_hex: format!("{:064x}", z),
            r_hex: format!("{:064x}", sig.r),
            s_hex: format!("{:064x}", sig.s),
            public_x_hex,
            public_y_hex,
        }
    }
}

impl std::fmt::Display for SignatureReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"Digest z:     0x{}
r:            0x{}
s:            0x{}
Public Key X: 0x{}
Public Key Y: 0x{}"#,
            self.z_hex, self.r_hex, self.s_hex, self.public_x_hex, self.public_y_hex
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyReport {
    pub z_hex: String,
    pub valid: bool,
}

impl std::fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.valid { "valid" } else { "INVALID" };
        write!(f, "Signature over 0x{}: {}", self.z_hex, verdict)
    }
}
