//! Private keys and ECDSA signing

use log::trace;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, Rng};

use super::point::{S256Point, G};
use super::scalar::Scalar;
use super::signature::Signature;
use super::N;
use crate::error::{Error, Result};
use crate::hash::hash256;

/// Secret scalar `e` together with its public point `e·G`
#[derive(Clone, Debug)]
pub struct PrivateKey {
    secret: Scalar,
    point: S256Point,
}

impl PrivateKey {
    /// Derive the key pair for `secret`, which is reduced mod n.
    pub fn new(secret: &BigUint) -> Result<Self> {
        let secret = Scalar::new(secret.clone());
        if secret.is_zero() {
            return Err(Error::ZeroScalar);
        }
        let point = G.mul_scalar(&secret)?;
        Ok(Self { secret, point })
    }

    #[inline]
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    #[inline]
    pub fn public_point(&self) -> &S256Point {
        &self.point
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.secret.to_bytes())
    }

    /// Sign digest `z` with an explicit nonce `k`.
    ///
    /// `r = (k·G).x`, `s = (z + r·e) / k mod n`, then `s` is normalized to
    /// the low half of the range.
    pub fn sign_with_nonce(&self, z: &BigUint, k: &Scalar) -> Result<Signature> {
        if k.is_zero() {
            return Err(Error::ZeroScalar);
        }
        let r_point = G.mul_scalar(k)?;
        let r = match r_point.x() {
            Some(x) => x.value().clone(),
            None => return Err(Error::ZeroScalar),
        };

        let k_inv = k.invert()?;
        let z = Scalar::new(z.clone());
        let r_scalar = Scalar::new(r.clone());
        let mut s = &(&z + &(&r_scalar * &self.secret)) * &k_inv;
        if s.is_high() {
            s = -s;
        }
        if s.is_zero() {
            return Err(Error::ZeroScalar);
        }

        Ok(Signature::new(r, s.value().clone()))
    }

    /// Sign with a nonce derived from the secret and the digest.
    pub fn sign(&self, z: &BigUint) -> Result<Signature> {
        let k = self.deterministic_nonce(z);
        self.sign_with_nonce(z, &k)
    }

    /// Sign with a uniformly random nonce in `[1, n)`.
    pub fn sign_with_rng<R: Rng + CryptoRng + ?Sized>(
        &self,
        z: &BigUint,
        rng: &mut R,
    ) -> Result<Signature> {
        let k = Scalar::new(rng.gen_biguint_range(&BigUint::one(), &*N));
        self.sign_with_nonce(z, &k)
    }

    /// `hash256(secret || z [|| counter])` mod n, retried until nonzero.
    fn deterministic_nonce(&self, z: &BigUint) -> Scalar {
        let z_bytes = Scalar::new(z.clone()).to_bytes();
        let mut counter: u32 = 0;
        loop {
            let mut data = Vec::with_capacity(68);
            data.extend_from_slice(&self.secret.to_bytes());
            data.extend_from_slice(&z_bytes);
            if counter > 0 {
                data.extend_from_slice(&counter.to_be_bytes());
            }
            let k = Scalar::from_digest(&hash256(&data));
            if !k.is_zero() {
                trace!("derived nonce after {} retries", counter);
                return k;
            }
            counter += 1;
        }
    }
}
