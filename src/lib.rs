//! A Fiat-Shamir signature scheme over the ring `R_q = Z_q[X]/(X^n+1)`,
//! built on the ring-learning-with-errors hardness assumption.
//!
//! Signing is a commit-challenge-response protocol made non-interactive by
//! deriving the challenge from a random oracle, with rejection sampling to
//! keep the response's distribution independent of the secret key.

pub mod codec;
mod combinadic;
pub mod error;
mod hash;
pub mod keys;
pub mod params;
mod ring;
mod rng;
mod sampler;
pub mod sign;
pub mod verify;

pub use error::GlyphError;
pub use keys::{keygen, PublicKey, SecretKey};
pub use sign::{sign, Signature};
pub use verify::verify;
