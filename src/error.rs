//! Error types for the GLYPH/AGLYPH signature scheme.

use thiserror::Error;

/// Errors that can occur during GLYPH cryptographic operations.
///
/// `verify` never surfaces this type directly: any parse or bound failure
/// during verification collapses to a plain `false`, so the verifier
/// boundary leaks no granular failure reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// A public key's byte encoding was the wrong length or out of range.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// A signature's byte encoding was the wrong length or out of range.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// The Sign rejection loop exceeded its iteration cap without producing
    /// an admissible response. Indicates misconfigured parameters.
    #[error("signing did not converge within the iteration cap")]
    SigningExhausted,

    /// The hash-to-sparse oracle consumed more candidate draws than its
    /// bound allows without selecting `k` distinct positions.
    #[error("challenge derivation exceeded its draw budget")]
    ChallengeDerivationExhausted,

    /// The OS entropy source failed to supply randomness.
    #[error("entropy source failure: {0}")]
    EntropyFailure(String),
}
