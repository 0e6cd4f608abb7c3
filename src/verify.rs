//! Verify (§4.8): recompute the commitment from the response and challenge,
//! then check the challenge re-derives.

use crate::{hash, keys::PublicKey, params, sign::Signature};

/// Verify `sig` over `m` under `pk`.
///
/// Fails closed: any parse error, out-of-bound response, or hash mismatch
/// yields `false`, never a panic or a surfaced [`crate::error::GlyphError`].
pub fn verify(pk: &PublicKey, m: &[u8], sig: &Signature) -> bool {
    let (z1, z2, c) = match sig.parts() {
        Ok(parts) => parts,
        Err(_) => return false,
    };

    if z1.infinity_norm() > params::B_S || z2.infinity_norm() > params::B_S {
        return false;
    }

    let a = params::public_a();
    let t = pk.t();

    let w_prime = &(&(a * &z1) + &z2) - &(&t * &c);

    let c_prime = match hash::hash_to_sparse(&w_prime, m, params::K) {
        Ok(c_prime) => c_prime,
        Err(_) => return false,
    };

    c_prime == c
}
