//! Key types and KeyGen (§4.6).

use crate::{
    codec,
    error::GlyphError,
    params::{self, Q},
    ring::Poly,
    sampler,
};
use rand_core::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The public, ring-element key `t = a*s + e`, serialized per §4.5 with
/// `b = floor(q/2)`.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    bytes: Vec<u8>,
}

impl PublicKey {
    fn pack_bound() -> i64 {
        Q as i64 / 2
    }

    fn from_poly(t: &Poly) -> Self {
        PublicKey {
            bytes: codec::pack_poly(Self::pack_bound(), t),
        }
    }

    /// The parsed ring element `t`. Bytes are validated once at
    /// construction ([`PublicKey::from_bytes`] or [`crate::keygen`]), so
    /// this cannot fail on a `PublicKey` that already exists.
    pub(crate) fn t(&self) -> Poly {
        codec::unpack_poly(Self::pack_bound(), &self.bytes)
            .expect("PublicKey bytes were validated at construction")
    }

    /// The packed wire encoding of this public key.
    pub fn to_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Parse a public key from its packed wire encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GlyphError> {
        let expected = params::public_key_len();
        if bytes.len() != expected {
            return Err(GlyphError::InvalidPublicKey(format!(
                "expected {expected} bytes, got {}",
                bytes.len()
            )));
        }
        // Validate the encoding parses to a well-formed ring element.
        codec::unpack_poly(Self::pack_bound(), bytes)?;
        Ok(PublicKey {
            bytes: bytes.to_vec(),
        })
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({:02x?}...)", &self.bytes[..8.min(self.bytes.len())])
    }
}

/// The secret key `(s, e)`: two bounded ring elements with centered
/// coefficients in `[-1, 1]`. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub(crate) s: Poly,
    pub(crate) e: Poly,
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey([REDACTED])")
    }
}

/// Generate a fresh `(pk, sk)` keypair.
///
/// `s` and `e` are sampled with coefficients uniform in `[-1, 1]`; the
/// public key is `t = a*s + e`.
pub fn keygen() -> (PublicKey, SecretKey) {
    let mut rng = OsRng;
    let s = sampler::sample_bounded_keygen(&mut rng, 1, None);
    let e = sampler::sample_bounded_keygen(&mut rng, 1, None);

    let a = params::public_a();
    let t = &(a * &s) + &e;

    let pk = PublicKey::from_poly(&t);
    let sk = SecretKey { s, e };
    (pk, sk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keygen_produces_valid_public_key_bytes() {
        let (pk, _sk) = keygen();
        assert_eq!(pk.to_bytes().len(), params::public_key_len());
    }

    #[test]
    fn public_key_round_trips_through_bytes() {
        let (pk, _sk) = keygen();
        let restored = PublicKey::from_bytes(pk.to_bytes()).unwrap();
        assert_eq!(pk, restored);
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let (_pk, sk) = keygen();
        assert_eq!(format!("{sk:?}"), "SecretKey([REDACTED])");
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let bytes = vec![0u8; 4];
        assert!(matches!(
            PublicKey::from_bytes(&bytes),
            Err(GlyphError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn keygen_is_randomized() {
        let (pk1, _) = keygen();
        let (pk2, _) = keygen();
        assert_ne!(pk1, pk2);
    }
}
