//! The rejection-sampling commit-challenge-response Sign loop (§4.7).

use crate::{
    codec,
    error::GlyphError,
    hash,
    keys::SecretKey,
    params::{self, B, B_S, K, N},
    ring::Poly,
    rng::AesCtrStream,
    sampler,
};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroize;

/// Cap on rejection-loop iterations per §9: signing that never converges
/// within this bound indicates a parameter misconfiguration, not bad luck.
const MAX_SIGN_ATTEMPTS: usize = 1 << 20;

/// A signature `(z1, z2, c)`, packed as `z1 || z2 || c`.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    bytes: Vec<u8>,
}

impl Signature {
    /// The packed wire encoding of this signature.
    pub fn to_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Parse a signature from its packed wire encoding. Only the overall
    /// length is checked here; bound and challenge-weight validity are
    /// checked by `verify`, which must fail closed (return `false`) rather
    /// than surface a parse error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GlyphError> {
        let expected = params::signature_len();
        if bytes.len() != expected {
            return Err(GlyphError::InvalidSignature(format!(
                "expected {expected} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Signature {
            bytes: bytes.to_vec(),
        })
    }

    pub(crate) fn parts(&self) -> Result<(Poly, Poly, Poly), GlyphError> {
        let rlen = params::response_len();
        let (z1_bytes, rest) = self.bytes.split_at(rlen);
        let (z2_bytes, c_bytes) = rest.split_at(rlen);

        let z1 = codec::unpack_poly(B_S, z1_bytes)?;
        let z2 = codec::unpack_poly(B_S, z2_bytes)?;
        let c = codec::decode_k_sparse(c_bytes, K, N)?;
        Ok((z1, z2, c))
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Signature({:02x?}...)",
            &self.bytes[..8.min(self.bytes.len())]
        )
    }
}

/// Sign `m` under `sk`, retrying with fresh randomness whenever the
/// response exceeds the bound `B_s = B - k`.
pub fn sign(sk: &SecretKey, m: &[u8]) -> Result<Signature, GlyphError> {
    let a = params::public_a();

    for attempt in 0..MAX_SIGN_ATTEMPTS {
        if attempt > 0 {
            log::debug!("sign: rejection loop retry {attempt}");
        }

        let mut key = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut key)
            .map_err(|e| GlyphError::EntropyFailure(e.to_string()))?;
        let mut stream = AesCtrStream::new(key);
        key.zeroize();

        let mut y1 = sampler::sample_bounded_stream(&mut stream, B);
        let mut y2 = sampler::sample_bounded_stream(&mut stream, B);

        let w = &(a * &y1) + &y2;
        let c = hash::hash_to_sparse(&w, m, K)?;

        let mut z1 = &(&sk.s * &c) + &y1;
        let mut z2 = &(&sk.e * &c) + &y2;

        y1.zeroize();
        y2.zeroize();

        if z1.infinity_norm() > B_S || z2.infinity_norm() > B_S {
            z1.zeroize();
            z2.zeroize();
            log::warn!("sign: response exceeded bound, rejecting attempt {attempt}");
            continue;
        }

        let mut bytes = codec::pack_poly(B_S, &z1);
        bytes.extend_from_slice(&codec::pack_poly(B_S, &z2));
        bytes.extend_from_slice(&codec::encode_k_sparse(&c, K, N));

        z1.zeroize();
        z2.zeroize();

        log::debug!("sign: accepted after {} attempt(s)", attempt + 1);
        return Ok(Signature { bytes });
    }

    log::warn!("sign: exhausted {MAX_SIGN_ATTEMPTS} attempts without an admissible response");
    Err(GlyphError::SigningExhausted)
}
