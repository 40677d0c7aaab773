//! Verification API
//!
//! Recompute a revealed commitment from the printed values alone.

use thiserror::Error;

use crate::core::hash::{from_hex, Digest};
use crate::proof::commitment::{Commitment, CommitmentError, Reveal, SecretKey};

/// Errors that can occur during verification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerificationError {
    /// Digest is not 32 bytes of hex.
    #[error("malformed digest")]
    MalformedDigest,

    /// Key is not valid hex or is too short.
    #[error("malformed key: {0}")]
    MalformedKey(#[from] CommitmentError),

    /// Recomputed digest differs from the published one.
    #[error("digest does not match key and move {label:?}")]
    DigestMismatch {
        /// The label that was checked.
        label: String,
    },
}

/// Verify a round from its printed `HMAC`, `HMAC key` and computer move.
pub fn verify_reveal(digest_hex: &str, key_hex: &str, label: &str) -> Result<(), VerificationError> {
    let digest: Digest = from_hex(digest_hex)
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(VerificationError::MalformedDigest)?;
    let key = SecretKey::from_hex(key_hex)?;

    check(&Commitment::from_digest(digest), &key, label)
}

impl Reveal {
    /// Check that the revealed key and move open the announced commitment.
    pub fn verify(&self) -> Result<(), VerificationError> {
        check(&self.commitment, &self.key, self.computer_move.as_str())
    }
}

fn check(commitment: &Commitment, key: &SecretKey, label: &str) -> Result<(), VerificationError> {
    if commitment.opens_to(key, label.as_bytes()) {
        Ok(())
    } else {
        Err(VerificationError::DigestMismatch { label: label.to_string() })
    }
}
