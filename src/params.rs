//! Compile-time scheme parameters.
//!
//! This crate ships a single concrete GLYPH instantiation, matching the
//! parameter set used in the scheme's reference test vectors. All five are
//! read-only scheme constants after process start (§5): the ring dimension
//! `N`, modulus `Q`, the public ring element `a` ([`public_a`]), the
//! y-sample bound `B`, and the sparse-challenge weight `K`.

use crate::ring::Poly;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Ring dimension, a power of two.
pub const N: usize = 1024;

/// Prime modulus.
pub const Q: u32 = 59393;

/// Coefficient bound for the y-samples drawn during Sign.
pub const B: i64 = 16383;

/// Hamming weight of the sparse challenge polynomial `c`.
pub const K: usize = 16;

/// Tight response bound used in the Sign/Verify norm check: `B - K`.
pub const B_S: i64 = B - K as i64;

/// Domain separator for deriving the scheme-wide public element `a`.
const A_DOMAIN: &[u8] = b"GLYPH-RLWE/public-a/v1";

/// The public, uniformly-random ring element shared by all users of this
/// scheme instance. Derived once by expanding a fixed domain string through
/// the hash-to-ring procedure, so it never needs to be shipped as a literal
/// constant.
pub fn public_a() -> &'static Poly {
    static A: Lazy<Poly> = Lazy::new(|| expand_ring_element(A_DOMAIN));
    &A
}

/// Expand a domain-separation tag into a uniformly-random ring element,
/// drawing each coefficient from a SHAKE-256 stream via rejection sampling.
pub(crate) fn expand_ring_element(domain: &[u8]) -> Poly {
    let mut hasher = Shake256::default();
    hasher.update(domain);
    let mut reader = hasher.finalize_xof();

    let limit = u32::MAX - (u32::MAX % Q);
    let mut coeffs = Vec::with_capacity(N);
    for _ in 0..N {
        loop {
            let mut buf = [0u8; 4];
            reader.read(&mut buf);
            let v = u32::from_be_bytes(buf);
            if v < limit {
                coeffs.push(v % Q);
                break;
            }
        }
    }
    Poly::from_unsigned(coeffs)
}

/// Byte length of a general-packed polynomial bounded by `b`, computed
/// exactly from the bit length of `(2b+1)^N - 1` rather than via
/// floating-point `log2` (which loses precision at this magnitude).
pub(crate) fn packed_len(b: i64) -> usize {
    let r = BigUint::from((2 * b + 1) as u64);
    let max_val = r.pow(N as u32) - BigUint::one();
    ((max_val.bits() as usize) + 7) / 8
}

/// Byte length of a k-sparse packed challenge, computed exactly from the
/// bit length of `C(n,k) * 2^k - 1`.
pub(crate) fn k_sparse_len(n: usize, k: usize) -> usize {
    let combinations = crate::combinadic::binomial(n, k);
    let max_val = if combinations.is_zero() {
        BigUint::zero()
    } else {
        (combinations << k) - BigUint::one()
    };
    ((max_val.bits() as usize) + 7) / 8
}

/// Byte length of the packed public key under this parameter set.
pub fn public_key_len() -> usize {
    packed_len(Q as i64 / 2)
}

/// Byte length of a single bounded response (`z1` or `z2`) in a signature.
pub fn response_len() -> usize {
    packed_len(B_S)
}

/// Byte length of the packed challenge `c` in a signature.
pub fn challenge_len() -> usize {
    k_sparse_len(N, K)
}

/// Total byte length of a signature: `z1 || z2 || c`.
pub fn signature_len() -> usize {
    2 * response_len() + challenge_len()
}
