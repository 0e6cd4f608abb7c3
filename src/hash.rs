//! The hash-to-sparse Fiat-Shamir oracle `H(w, m)` (§4.4).
//!
//! `w` is serialized little-endian, 2 bytes per coefficient (the low 16
//! bits of its unsigned lift), followed by the raw message bytes. The
//! buffer seeds a SHAKE-256 extendable-output stream; bits from that stream
//! pick `k` distinct positions in `[0, n)` and a sign for each.

use crate::{error::GlyphError, params::N, ring::Poly};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Generous cap on candidate draws before giving up, per §9's "bound it and
/// fail hard on exhaustion". In practice a uniform oracle needs only a
/// small multiple of `k` draws to find `k` distinct positions in `[0, n)`.
const MAX_CANDIDATE_DRAWS: usize = 1 << 20;

/// Serialize a ring element and message for hashing, per §4.4.
fn serialize_for_hash(w: &Poly, m: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(w.unsigned_coeffs().len() * 2 + m.len());
    for &c in w.unsigned_coeffs() {
        buf.extend_from_slice(&(c as u16).to_le_bytes());
    }
    buf.extend_from_slice(m);
    buf
}

/// Derive the k-sparse ternary challenge `c = H(w, m)`.
///
/// Deterministic: identical `(w, m)` always yields an identical `c`.
pub fn hash_to_sparse(w: &Poly, m: &[u8], k: usize) -> Result<Poly, GlyphError> {
    let buf = serialize_for_hash(w, m);

    let mut hasher = Shake256::default();
    hasher.update(&buf);
    let mut bits = BitSource::new(hasher.finalize_xof());

    let pos_bits = ceil_log2(N);
    let mut coeffs = vec![0i64; N];
    let mut chosen = std::collections::HashSet::with_capacity(k);
    let mut draws = 0usize;

    while chosen.len() < k {
        if draws >= MAX_CANDIDATE_DRAWS {
            return Err(GlyphError::ChallengeDerivationExhausted);
        }
        draws += 1;

        let position = bits.next_bits(pos_bits) as usize;
        if position >= N || chosen.contains(&position) {
            continue;
        }
        let sign_bit = bits.next_bit();
        chosen.insert(position);
        coeffs[position] = if sign_bit == 1 { 1 } else { -1 };
    }

    Ok(Poly::from_centered(&coeffs))
}

/// Smallest number of bits needed to represent values in `[0, n)`.
fn ceil_log2(n: usize) -> u32 {
    let mut bits = 0u32;
    let mut v = 1usize;
    while v < n {
        v <<= 1;
        bits += 1;
    }
    bits
}

/// Reads individual bits, most-significant-bit first per byte, from an
/// extendable-output hash reader.
struct BitSource<R: XofReader> {
    reader: R,
    byte: u8,
    bits_left: u8,
}

impl<R: XofReader> BitSource<R> {
    fn new(reader: R) -> Self {
        BitSource {
            reader,
            byte: 0,
            bits_left: 0,
        }
    }

    fn next_bit(&mut self) -> u8 {
        if self.bits_left == 0 {
            let mut buf = [0u8; 1];
            self.reader.read(&mut buf);
            self.byte = buf[0];
            self.bits_left = 8;
        }
        self.bits_left -= 1;
        (self.byte >> self.bits_left) & 1
    }

    fn next_bits(&mut self, n: u32) -> u32 {
        let mut v = 0u32;
        for _ in 0..n {
            v = (v << 1) | self.next_bit() as u32;
        }
        v
    }
}
