//! Deterministic, dense bit-packing of ring elements for the wire format and
//! hash-oracle input.
//!
//! Two encodings are provided:
//!   - [`pack_poly`]/[`unpack_poly`]: general base-r packing of a polynomial
//!     whose centered coefficients all lie in `[-b, b]`.
//!   - [`encode_k_sparse`]/[`decode_k_sparse`]: combinatorial-number-system
//!     packing of a ternary polynomial with exactly `k` nonzero coefficients.

use crate::{
    combinadic::{binomial, largest_m_with_binomial_leq},
    error::GlyphError,
    params::{self, N},
    ring::Poly,
};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Pack a polynomial whose centered coefficients all lie in `[-b, b]` into
/// its minimal-length base-`r` (`r = 2b+1`) big-endian byte encoding.
///
/// # Panics
/// Panics if any centered coefficient falls outside `[-b, b]`. This is a
/// precondition violated only by a caller bug, never by untrusted input
/// (untrusted bytes go through [`unpack_poly`], not this direction).
pub fn pack_poly(b: i64, poly: &Poly) -> Vec<u8> {
    let r = BigUint::from((2 * b + 1) as u64);
    let mut n_acc = BigUint::zero();
    for &c in poly.centered().iter() {
        assert!(
            c >= -b && c <= b,
            "coefficient {c} out of bound [-{b}, {b}]"
        );
        let offset = BigUint::from((c + b) as u64);
        n_acc = n_acc * &r + offset;
    }

    let byte_len = params::packed_len(b);
    let raw = n_acc.to_bytes_be();
    left_pad(raw, byte_len)
}

/// Invert [`pack_poly`]. Returns an error if `bytes` is not exactly the
/// expected length for this `(b, n)` pair, never panics on attacker-supplied
/// input.
pub fn unpack_poly(b: i64, bytes: &[u8]) -> Result<Poly, GlyphError> {
    let expected_len = params::packed_len(b);
    if bytes.len() != expected_len {
        return Err(GlyphError::InvalidSignature(format!(
            "expected {} bytes for a bounded polynomial, got {}",
            expected_len,
            bytes.len()
        )));
    }

    let r = BigUint::from((2 * b + 1) as u64);
    let mut n_acc = BigUint::from_bytes_be(bytes);

    let mut digits = Vec::with_capacity(N);
    for _ in 0..N {
        let (q, rem) = (&n_acc / &r, &n_acc % &r);
        n_acc = q;
        digits.push(rem);
    }
    digits.reverse();

    let mut coeffs = Vec::with_capacity(N);
    for digit in digits {
        let x = digit.to_i64().expect("digit fits a u64-sized remainder");
        coeffs.push(x - b);
    }

    Ok(Poly::from_centered(&coeffs))
}

/// Encode a ternary polynomial with exactly `k` nonzero coefficients into
/// the combinatorial-number-system packing described in §4.5.
///
/// # Panics
/// Panics if `poly` does not have coefficients in `{-1, 0, 1}` with exactly
/// `k` nonzero entries: a scheme-internal invariant, never caller input.
pub fn encode_k_sparse(poly: &Poly, k: usize, n: usize) -> Vec<u8> {
    let mut combinadic = BigUint::zero();
    let mut signs = BigUint::zero();
    let mut k_count = k;
    let mut nonzero_seen = 0usize;

    for (i, coeff) in poly.centered().into_iter().enumerate() {
        assert!(
            coeff == -1 || coeff == 0 || coeff == 1,
            "k-sparse polynomial must be ternary"
        );
        if coeff != 0 {
            let c = n - i;
            combinadic += binomial(c, k_count);
            k_count -= 1;

            signs <<= 1;
            if coeff == 1 {
                signs |= BigUint::one();
            }
            nonzero_seen += 1;
        }
    }
    assert_eq!(nonzero_seen, k, "k-sparse polynomial must have weight k");

    let packed = (combinadic << k) | signs;
    let byte_len = params::k_sparse_len(n, k);
    left_pad(packed.to_bytes_be(), byte_len)
}

/// Invert [`encode_k_sparse`]. Returns an error on malformed input rather
/// than panicking.
pub fn decode_k_sparse(bytes: &[u8], k: usize, n: usize) -> Result<Poly, GlyphError> {
    let expected_len = params::k_sparse_len(n, k);
    if bytes.len() != expected_len {
        return Err(GlyphError::InvalidSignature(format!(
            "expected {} bytes for a k-sparse challenge, got {}",
            expected_len,
            bytes.len()
        )));
    }

    let packed = BigUint::from_bytes_be(bytes);
    let sign_mask = (BigUint::one() << k) - BigUint::one();
    let signs = &packed & &sign_mask;
    let mut combinadic = packed >> k;

    let mut coeffs = vec![0i64; n];
    let mut k_count = k;

    for _ in 0..k {
        let m = largest_m_with_binomial_leq(n, k_count, &combinadic);
        if m == 0 {
            return Err(GlyphError::InvalidSignature(
                "k-sparse challenge decoded to an out-of-range position".into(),
            ));
        }
        combinadic -= binomial(m, k_count);

        let idx = n - m;
        if idx >= n {
            return Err(GlyphError::InvalidSignature(
                "k-sparse challenge position out of range".into(),
            ));
        }

        let sign_bit = (&signs >> (k_count - 1)) & BigUint::one();
        coeffs[idx] = if sign_bit.is_one() { 1 } else { -1 };

        k_count -= 1;
    }

    Ok(Poly::from_centered(&coeffs))
}

fn left_pad(mut raw: Vec<u8>, target_len: usize) -> Vec<u8> {
    if raw.len() >= target_len {
        return raw;
    }
    let mut padded = vec![0u8; target_len - raw.len()];
    padded.append(&mut raw);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{B_S, K};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_bounded_poly(rng: &mut StdRng, b: i64) -> Poly {
        let coeffs: Vec<i64> = (0..N).map(|_| rng.gen_range(-b..=b)).collect();
        Poly::from_centered(&coeffs)
    }

    fn random_ternary_poly(rng: &mut StdRng, k: usize, n: usize) -> Poly {
        let mut positions: Vec<usize> = (0..n).collect();
        for i in (1..positions.len()).rev() {
            let j = rng.gen_range(0..=i);
            positions.swap(i, j);
        }
        let mut coeffs = vec![0i64; n];
        for &p in positions.iter().take(k) {
            coeffs[p] = if rng.gen_bool(0.5) { 1 } else { -1 };
        }
        Poly::from_centered(&coeffs)
    }

    #[test]
    fn general_packing_round_trips() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let p = random_bounded_poly(&mut rng, B_S);
            let bytes = pack_poly(B_S, &p);
            let back = unpack_poly(B_S, &bytes).unwrap();
            assert_eq!(p, back);
        }
    }

    #[test]
    fn general_packing_length_is_constant() {
        let mut rng = StdRng::seed_from_u64(2);
        let len0 = pack_poly(B_S, &random_bounded_poly(&mut rng, B_S)).len();
        for _ in 0..10 {
            let p = random_bounded_poly(&mut rng, B_S);
            assert_eq!(pack_poly(B_S, &p).len(), len0);
        }
    }

    #[test]
    fn k_sparse_round_trips() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let p = random_ternary_poly(&mut rng, K, N);
            let bytes = encode_k_sparse(&p, K, N);
            let back = decode_k_sparse(&bytes, K, N).unwrap();
            assert_eq!(p, back);
        }
    }

    #[test]
    fn unpack_rejects_wrong_length() {
        let bytes = vec![0u8; 3];
        assert!(unpack_poly(B_S, &bytes).is_err());
    }

    #[test]
    fn decode_k_sparse_rejects_wrong_length() {
        let bytes = vec![0u8; 1];
        assert!(decode_k_sparse(&bytes, K, N).is_err());
    }

    proptest::proptest! {
        #[test]
        fn pack_unpack_round_trips_over_arbitrary_bounded_coeffs(
            coeffs in proptest::collection::vec(-B_S..=B_S, N)
        ) {
            let p = Poly::from_centered(&coeffs);
            let bytes = pack_poly(B_S, &p);
            let back = unpack_poly(B_S, &bytes).unwrap();
            proptest::prop_assert_eq!(p, back);
        }
    }
}
