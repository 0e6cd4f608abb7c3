//! Polynomial arithmetic in the quotient ring `R_q = Z_q[X]/(X^n+1)`.
//!
//! Coefficients are stored in unsigned form, i.e. each coefficient lives in
//! `[0, q)`. The centered representative in `(-q/2, q/2]` is produced on
//! demand by [`Poly::centered`]. Negacyclic reduction (`X^n = -1`) is applied
//! after every multiplication.

use crate::params::{N, Q};
use std::ops::{Add, Mul, Neg, Sub};

/// An element of `R_q`, represented by its `N` coefficients in `[0, Q)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly {
    coeffs: Vec<u32>,
}

impl Poly {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Poly { coeffs: vec![0; N] }
    }

    /// Build a polynomial from centered (signed) coefficients, reducing each
    /// one into `[0, Q)`.
    ///
    /// # Panics
    /// Panics if `coeffs.len() != N`.
    pub fn from_centered(coeffs: &[i64]) -> Self {
        assert_eq!(coeffs.len(), N, "wrong coefficient count for this ring");
        let unsigned = coeffs
            .iter()
            .map(|&c| Self::reduce_to_unsigned(c))
            .collect();
        Poly { coeffs: unsigned }
    }

    /// Build a polynomial directly from already-unsigned coefficients
    /// (each expected to already lie in `[0, Q)`).
    ///
    /// # Panics
    /// Panics if `coeffs.len() != N`.
    pub fn from_unsigned(coeffs: Vec<u32>) -> Self {
        assert_eq!(coeffs.len(), N, "wrong coefficient count for this ring");
        debug_assert!(coeffs.iter().all(|&c| c < Q));
        Poly { coeffs }
    }

    fn reduce_to_unsigned(c: i64) -> u32 {
        let q = Q as i64;
        (((c % q) + q) % q) as u32
    }

    /// Coefficients as unsigned integers in `[0, Q)`.
    pub fn unsigned_coeffs(&self) -> &[u32] {
        &self.coeffs
    }

    /// Mutable access to the underlying coefficients, for in-place
    /// zeroization of ephemeral/secret polynomials.
    pub(crate) fn coeffs_mut(&mut self) -> &mut [u32] {
        &mut self.coeffs
    }

    /// Coefficients lifted to the centered range `(-Q/2, Q/2]`.
    pub fn centered(&self) -> Vec<i64> {
        let half = (Q / 2) as i64;
        self.coeffs
            .iter()
            .map(|&c| {
                let c = c as i64;
                if c > half {
                    c - Q as i64
                } else {
                    c
                }
            })
            .collect()
    }

    /// The infinity norm: the maximum absolute centered coefficient.
    pub fn infinity_norm(&self) -> i64 {
        self.centered().into_iter().map(i64::abs).max().unwrap_or(0)
    }

    /// Multiply by a plain integer scalar.
    pub fn scalar_mul(&self, s: i64) -> Poly {
        let q = Q as i64;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| Self::reduce_to_unsigned((c as i64) * s % q))
            .collect();
        Poly { coeffs }
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;
    fn add(self, rhs: &Poly) -> Poly {
        let q = Q as i64;
        let coeffs = self
            .coeffs
            .iter()
            .zip(rhs.coeffs.iter())
            .map(|(&a, &b)| (((a as i64) + (b as i64)) % q) as u32)
            .collect();
        Poly { coeffs }
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;
    fn sub(self, rhs: &Poly) -> Poly {
        let q = Q as i64;
        let coeffs = self
            .coeffs
            .iter()
            .zip(rhs.coeffs.iter())
            .map(|(&a, &b)| Poly::reduce_to_unsigned((a as i64) - (b as i64)))
            .collect();
        let _ = q;
        Poly { coeffs }
    }
}

impl Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        let coeffs = self
            .coeffs
            .iter()
            .map(|&a| Poly::reduce_to_unsigned(-(a as i64)))
            .collect();
        Poly { coeffs }
    }
}

/// Schoolbook negacyclic multiplication: `a(X) * b(X) mod (X^N + 1)`.
impl Mul<&Poly> for &Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        let q = Q as i64;
        let mut acc = vec![0i64; N];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let a = a as i64;
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                if b == 0 {
                    continue;
                }
                let prod = a * (b as i64);
                let deg = i + j;
                if deg < N {
                    acc[deg] += prod;
                } else {
                    // X^N = -1, so X^(N+r) = -X^r.
                    acc[deg - N] -= prod;
                }
            }
        }
        let coeffs = acc
            .into_iter()
            .map(|c| Poly::reduce_to_unsigned(c % q))
            .collect();
        Poly { coeffs }
    }
}

macro_rules! owned_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<Poly> for Poly {
            type Output = Poly;
            fn $method(self, rhs: Poly) -> Poly {
                $trait::$method(&self, &rhs)
            }
        }
        impl $trait<&Poly> for Poly {
            type Output = Poly;
            fn $method(self, rhs: &Poly) -> Poly {
                $trait::$method(&self, rhs)
            }
        }
    };
}

owned_binop!(Add, add);
owned_binop!(Sub, sub);
owned_binop!(Mul, mul);

impl zeroize::Zeroize for Poly {
    fn zeroize(&mut self) {
        self.coeffs_mut().zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_additive_identity() {
        let mut coeffs = vec![0i64; N];
        coeffs[0] = 5;
        coeffs[1] = -3;
        let p = Poly::from_centered(&coeffs);
        let z = Poly::zero();
        assert_eq!((&p + &z).centered(), p.centered());
    }

    #[test]
    fn centered_lift_rule() {
        let half = (Q / 2) as i64;
        let p = Poly::from_unsigned({
            let mut v = vec![0u32; N];
            v[0] = half as u32; // exactly q/2, stays positive
            v[1] = half as u32 + 1; // q/2 + 1, becomes negative
            v
        });
        let c = p.centered();
        assert_eq!(c[0], half);
        assert_eq!(c[1], half + 1 - Q as i64);
    }

    #[test]
    fn negacyclic_wrap() {
        // X^(N-1) * X = X^N = -1, i.e. coefficient -1 at index 0.
        let mut a = vec![0i64; N];
        a[N - 1] = 1;
        let mut b = vec![0i64; N];
        b[1] = 1;
        let pa = Poly::from_centered(&a);
        let pb = Poly::from_centered(&b);
        let prod = &pa * &pb;
        let c = prod.centered();
        assert_eq!(c[0], -1);
        assert!(c[1..].iter().all(|&x| x == 0));
    }

    #[test]
    fn infinity_norm_matches_max_abs_centered() {
        let mut coeffs = vec![0i64; N];
        coeffs[3] = -42;
        coeffs[9] = 17;
        let p = Poly::from_centered(&coeffs);
        assert_eq!(p.infinity_norm(), 42);
    }

    #[test]
    fn multiplication_is_commutative() {
        let mut a = vec![0i64; N];
        let mut b = vec![0i64; N];
        for i in 0..N {
            a[i] = ((i * 7 + 3) % 11) as i64 - 5;
            b[i] = ((i * 13 + 1) % 9) as i64 - 4;
        }
        let pa = Poly::from_centered(&a);
        let pb = Poly::from_centered(&b);
        assert_eq!((&pa * &pb).unsigned_coeffs(), (&pb * &pa).unsigned_coeffs());
    }
}
