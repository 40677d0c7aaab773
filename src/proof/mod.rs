//! Commit-Reveal Proof System
//!
//! Lets the player check that the computer's move was fixed before the
//! player's input was read:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROOF SYSTEM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  commitment.rs   - Per-round key, sealed move, reveal       │
//! │  verify.rs       - Recompute a reveal from printed values   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod verify;

// Re-export key types
pub use commitment::{
    Commitment, CommitmentError, MoveListCommitment, Reveal, SealedMove, SecretKey,
    MIN_KEY_BYTES, MOVE_LIST_SEPARATOR,
};
pub use verify::{verify_reveal, VerificationError};
