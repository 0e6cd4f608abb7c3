//! Combinatorial number system support: cached binomial coefficients and the
//! bijection between k-subsets of `[0, n)` and integers in `[0, C(n,k))`,
//! used by the k-sparse challenge codec (`codec::{encode,decode}_k_sparse`).

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use std::{collections::HashMap, sync::Mutex};

/// Process-wide memoization of `C(n, k)`, the only mutable global state in
/// this crate (§5, §9). `k` only ever ranges over `1..=K` in practice, so
/// the cache stays tiny.
static BINOMIAL_CACHE: Lazy<Mutex<HashMap<(usize, usize), BigUint>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// `C(n, k)`, the number of k-subsets of an n-element set. Returns zero if
/// `k > n`.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    // C(n, k) == C(n, n-k); using the smaller side keeps the loop short.
    let k = k.min(n - k);

    if let Some(cached) = BINOMIAL_CACHE.lock().unwrap().get(&(n, k)) {
        return cached.clone();
    }

    let mut result = BigUint::one();
    for i in 0..k {
        result = (result * (n - i)) / (i + 1);
    }

    BINOMIAL_CACHE
        .lock()
        .unwrap()
        .insert((n, k), result.clone());
    result
}

/// Binary search for the largest `m` in `[0, n]` with `C(m, k) <= target`.
/// Used by `codec::decode_k_sparse` to invert the combinadic encoding.
pub fn largest_m_with_binomial_leq(n: usize, k: usize, target: &BigUint) -> usize {
    let mut lo = 0usize;
    let mut hi = n;
    // Invariant: C(lo, k) <= target (true at lo=0 since C(0,k)=0 for k>=1,
    // or C(0,0)=1 <= target for any non-negative target).
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if binomial(mid, k) <= *target {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}
