//! Core primitives.
//!
//! Moves, the win relation, entropy and the keyed digest. Everything here is
//! a pure function of its inputs except for the random draws in `rng`.

pub mod moves;
pub mod rules;
pub mod rng;
pub mod hash;

// Re-export core types
pub use moves::{Move, MoveSet, MoveSetError, MIN_MOVES};
pub use rules::{resolve_round, Outcome, WinRelation};
pub use rng::{fill_key, pick_index, SessionRng};
pub use hash::{hmac_sha256, Digest};
