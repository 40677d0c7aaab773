//! Game Loop Module
//!
//! ## Module Structure
//!
//! - `input`: Prompt line parsing
//! - `state`: Round state machine and per-round report
//! - `events`: Console output for every session event
//! - `session`: The interactive commit-reveal loop

pub mod input;
pub mod state;
pub mod events;
pub mod session;

// Re-export key types
pub use input::Command;
pub use state::{RoundReport, SessionState, SessionSummary};
pub use events::SessionEvent;
pub use session::{Session, SessionError};
