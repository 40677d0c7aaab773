//! Session State Machine
//!
//! One round moves `AwaitingInput -> (Help | InvalidInput | Resolved | Exit)`.
//! Every state but `Exit` returns to `AwaitingInput`.

use crate::core::moves::Move;
use crate::core::rules::Outcome;
use crate::game::input::Command;
use crate::proof::commitment::Reveal;

/// Where the session is in the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Blocked on one line of input.
    #[default]
    AwaitingInput,
    /// Menu requested.
    Help,
    /// Unrecognized token or out-of-range number.
    InvalidInput,
    /// A valid move was played and the round resolved.
    Resolved,
    /// Terminal.
    Exit,
}

impl SessionState {
    /// State reached from `AwaitingInput` on `command`.
    pub fn after(command: &Command) -> Self {
        match command {
            Command::Exit => Self::Exit,
            Command::Help => Self::Help,
            Command::Play(_) => Self::Resolved,
            Command::Invalid(_) => Self::InvalidInput,
        }
    }

    /// State after this one has been handled.
    pub fn next(self) -> Self {
        match self {
            Self::Exit => Self::Exit,
            _ => Self::AwaitingInput,
        }
    }

    /// True once the session is over.
    pub fn is_terminal(self) -> bool {
        self == Self::Exit
    }
}

/// Everything printed about one resolved round. Not retained afterwards.
#[derive(Clone, Debug)]
pub struct RoundReport {
    /// Human's move.
    pub user_move: Move,
    /// Result for the human.
    pub outcome: Outcome,
    /// Computer's move, key and commitment.
    pub reveal: Reveal,
}

impl RoundReport {
    /// Computer's move.
    pub fn computer_move(&self) -> &Move {
        &self.reveal.computer_move
    }
}

/// Running totals for one session, held in memory only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Resolved rounds.
    pub rounds: u32,
    /// Rounds the human won.
    pub wins: u32,
    /// Rounds the human lost.
    pub losses: u32,
    /// Tied rounds.
    pub ties: u32,
}

impl SessionSummary {
    /// Count one outcome.
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}
