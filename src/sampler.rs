//! Bounded and k-sparse polynomial sampling (§4.3).

use crate::{params::N, ring::Poly, rng::AesCtrStream};
use rand::{CryptoRng, Rng, RngCore};

/// Sample a degree-`N` polynomial with centered coefficients drawn
/// uniformly from `[-bound, bound]` via a cryptographic RNG, used at
/// KeyGen time for `s` and `e`.
///
/// `disallow` optionally excludes a single coefficient value (e.g. `0`,
/// to force a strictly ternary non-zero spread); the scheme's default
/// keygen sampling leaves it unset.
pub fn sample_bounded_keygen<R: RngCore + CryptoRng>(
    rng: &mut R,
    bound: i64,
    disallow: Option<i64>,
) -> Poly {
    let coeffs: Vec<i64> = (0..N)
        .map(|_| loop {
            let c = rng.gen_range(-bound..=bound);
            if Some(c) != disallow {
                break c;
            }
        })
        .collect();
    Poly::from_centered(&coeffs)
}

/// Sample a degree-`N` polynomial with centered coefficients drawn
/// uniformly from `[-bound, bound]` using the deterministic AES-CTR
/// stream, used for `y1, y2` during Sign.
///
/// Each coefficient consumes exactly one stream word: the word is masked
/// down to the smallest number of bits covering `2*bound+1` values and the
/// draw is rejected (discarding the whole word) if it lands outside range.
pub fn sample_bounded_stream(stream: &mut AesCtrStream, bound: i64) -> Poly {
    let range = (2 * bound + 1) as u64;
    let mask = bit_mask_covering(range);

    let coeffs: Vec<i64> = (0..N)
        .map(|_| loop {
            let word = stream.next_u64();
            let candidate = word & mask;
            if candidate < range {
                break candidate as i64 - bound;
            }
        })
        .collect();
    Poly::from_centered(&coeffs)
}

/// The smallest all-ones bitmask `2^b - 1` with `2^b >= range`.
fn bit_mask_covering(range: u64) -> u64 {
    let mut bits = 0u32;
    while (1u64 << bits) < range {
        bits += 1;
    }
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}
