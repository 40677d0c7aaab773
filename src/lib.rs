//! # HMAC Rock-Paper-Scissors
//!
//! Rock-paper-scissors over any odd number of moves, played against the
//! computer, with an HMAC commit-reveal so the player can verify the
//! computer's move was fixed before the player chose.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HMAC RPS                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Pure primitives                           │
//! │  ├── moves.rs    - Move labels and the validated move set    │
//! │  ├── rules.rs    - Win relation and round resolution         │
//! │  ├── rng.rs      - Cryptographic entropy source              │
//! │  └── hash.rs     - HMAC-SHA256 and hex helpers               │
//! │                                                              │
//! │  proof/          - Commit-reveal                             │
//! │  ├── commitment.rs - Keys, sealed moves, reveals             │
//! │  └── verify.rs   - Recompute a reveal                        │
//! │                                                              │
//! │  game/           - Interactive loop                          │
//! │  ├── input.rs    - Prompt line parsing                       │
//! │  ├── state.rs    - Round state machine                       │
//! │  ├── events.rs   - Console output                            │
//! │  └── session.rs  - Session engine                            │
//! │                                                              │
//! │  config.rs       - Session configuration                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness
//!
//! Each round the computer's move is drawn and committed under a fresh
//! 256-bit key before the player's input is read. After the round the key
//! and move are printed, and `HMAC-SHA256(key, move)` must equal the digest
//! announced earlier. Keys are never reused.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use config::{ConfigError, SessionConfig};
pub use crate::core::moves::{Move, MoveSet, MoveSetError};
pub use crate::core::rules::{resolve_round, Outcome, WinRelation};
pub use game::session::{Session, SessionError};
pub use proof::commitment::{Commitment, Reveal, SealedMove, SecretKey};
pub use proof::verify::verify_reveal;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage line printed when the move list is rejected.
pub const USAGE: &str = "Usage: hmac-rps move1 move2 ... moveN";
