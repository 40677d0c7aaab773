//! Move Commitment Protocol
//!
//! The computer commits to its move before the human answers and reveals the
//! key afterwards, so the human can check the move was not changed.
//!
//! The key is printed as uppercase hex and the HMAC is keyed with the ASCII
//! bytes of that hex string. Any stock HMAC-SHA256 tool given the printed
//! `HMAC key` and the move label therefore reproduces the printed `HMAC`.

use std::fmt;
use thiserror::Error;

use crate::core::hash::{from_hex, hmac_sha256, hmac_sha256_matches, to_upper_hex, Digest};
use crate::core::moves::{Move, MoveSet};
use crate::core::rng::{fill_key, SessionRng};

/// Minimum key size in bytes (256 bits).
pub const MIN_KEY_BYTES: usize = 32;

/// Separator used when committing to the whole move list.
pub const MOVE_LIST_SEPARATOR: &str = ":";

/// Errors raised while creating commitments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitmentError {
    /// Key shorter than 256 bits.
    #[error("key must be at least {min} bytes, got {got}")]
    KeyTooShort {
        /// Minimum accepted length in bytes.
        min: usize,
        /// Length supplied.
        got: usize,
    },

    /// Key is not valid hex.
    #[error("key is not valid hex: {0}")]
    MalformedKey(#[from] hex::FromHexError),
}

/// Secret HMAC key for a single commitment.
///
/// Never reused: every sealed move gets its own.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    hex: String,
}

impl SecretKey {
    /// Generate `len` fresh random bytes.
    pub fn generate<R: SessionRng>(rng: &mut R, len: usize) -> Result<Self, CommitmentError> {
        if len < MIN_KEY_BYTES {
            return Err(CommitmentError::KeyTooShort { min: MIN_KEY_BYTES, got: len });
        }
        Ok(Self { hex: to_upper_hex(&fill_key(rng, len)) })
    }

    /// Parse a revealed key.
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        let bytes = from_hex(s)?;
        if bytes.len() < MIN_KEY_BYTES {
            return Err(CommitmentError::KeyTooShort { min: MIN_KEY_BYTES, got: bytes.len() });
        }
        Ok(Self { hex: to_upper_hex(&bytes) })
    }

    /// Uppercase hex form, as revealed to the player.
    pub fn to_hex(&self) -> &str {
        &self.hex
    }

    /// Key size in bytes.
    pub fn len(&self) -> usize {
        self.hex.len() / 2
    }

    /// Always false; keys are at least [`MIN_KEY_BYTES`] long.
    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }

    /// Bytes fed to HMAC.
    fn material(&self) -> &[u8] {
        self.hex.as_bytes()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").field("len", &self.len()).finish_non_exhaustive()
    }
}

/// Published commitment digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitment {
    digest: Digest,
}

impl Commitment {
    /// Commit to `data` under `key`.
    pub fn seal(key: &SecretKey, data: &[u8]) -> Self {
        Self { digest: hmac_sha256(key.material(), data) }
    }

    /// Wrap a digest received from elsewhere.
    pub fn from_digest(digest: Digest) -> Self {
        Self { digest }
    }

    /// Raw digest.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Uppercase hex digest, as printed.
    pub fn digest_hex(&self) -> String {
        to_upper_hex(&self.digest)
    }

    /// Does `(key, data)` open this commitment?
    pub fn opens_to(&self, key: &SecretKey, data: &[u8]) -> bool {
        hmac_sha256_matches(key.material(), data, &self.digest)
    }
}

/// A computer move fixed and committed before the human answers.
///
/// Can only be revealed once; revealing consumes it.
#[derive(Debug)]
pub struct SealedMove {
    computer_move: Move,
    key: SecretKey,
    commitment: Commitment,
}

impl SealedMove {
    /// Pick a move uniformly, generate a fresh key and commit.
    pub fn draw<R: SessionRng>(
        rng: &mut R,
        moves: &MoveSet,
        key_len: usize,
    ) -> Result<Self, CommitmentError> {
        let computer_move = moves.pick(rng).clone();
        let key = SecretKey::generate(rng, key_len)?;
        let commitment = Commitment::seal(&key, computer_move.as_bytes());

        Ok(Self { computer_move, key, commitment })
    }

    /// Published digest.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Reveal the move and key.
    pub fn reveal(self) -> Reveal {
        Reveal {
            computer_move: self.computer_move,
            key: self.key,
            commitment: self.commitment,
        }
    }
}

/// Values disclosed after a round so the player can verify it.
#[derive(Clone, Debug)]
pub struct Reveal {
    /// The computer's move.
    pub computer_move: Move,
    /// The key the move was committed under.
    pub key: SecretKey,
    /// The commitment announced before the round.
    pub commitment: Commitment,
}

/// Commitment over the whole move list, published at startup.
///
/// Sealed under its own key, which is revealed when the session ends.
#[derive(Debug)]
pub struct MoveListCommitment {
    key: SecretKey,
    commitment: Commitment,
}

impl MoveListCommitment {
    /// Commit to the `:`-joined move labels.
    pub fn seal<R: SessionRng>(
        rng: &mut R,
        moves: &MoveSet,
        key_len: usize,
    ) -> Result<Self, CommitmentError> {
        let key = SecretKey::generate(rng, key_len)?;
        let commitment = Commitment::seal(&key, moves.labels_joined(MOVE_LIST_SEPARATOR).as_bytes());
        Ok(Self { key, commitment })
    }

    /// Published digest.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Does this commitment match `moves`?
    pub fn matches(&self, moves: &MoveSet) -> bool {
        self.commitment
            .opens_to(&self.key, moves.labels_joined(MOVE_LIST_SEPARATOR).as_bytes())
    }

    /// Reveal the key.
    pub fn reveal_key(self) -> SecretKey {
        self.key
    }
}
