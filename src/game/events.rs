//! Session Events
//!
//! Everything the session prints, in one place. Each event renders to the
//! exact console lines of the game protocol.

use std::fmt;
use std::io::{self, Write};

use crate::core::moves::MoveSet;
use crate::game::input::{EXIT_TOKEN, HELP_TOKEN};
use crate::game::state::RoundReport;
use crate::proof::commitment::{Commitment, SecretKey};

/// Something the session shows the player.
#[derive(Debug)]
pub enum SessionEvent<'a> {
    /// Startup commitment over the move list.
    MoveListCommitted(&'a Commitment),
    /// Numbered move menu.
    Menu(&'a MoveSet),
    /// Commitment to the computer's next move, shown before the prompt.
    RoundCommitted(&'a Commitment),
    /// Input prompt (no line break).
    Prompt(&'a str),
    /// Unusable input.
    InvalidMove,
    /// Round result and reveal.
    RoundResolved(&'a RoundReport),
    /// Player chose to leave.
    Exiting,
    /// Key for the startup commitment, revealed on exit.
    MoveListKey(&'a SecretKey),
}

impl SessionEvent<'_> {
    /// Write the event, flushing so a prompt is visible before blocking.
    pub fn emit<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Prompt(_) => write!(out, "{}", self)?,
            _ => writeln!(out, "{}", self)?,
        }
        out.flush()
    }
}

impl fmt::Display for SessionEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveListCommitted(commitment) | Self::RoundCommitted(commitment) => {
                write!(f, "HMAC: {}", commitment.digest_hex())
            }
            Self::Menu(moves) => {
                writeln!(f, "Available moves:")?;
                for (i, mv) in moves.iter().enumerate() {
                    writeln!(f, "{} - {}", i + 1, mv)?;
                }
                writeln!(f, "{} - exit", EXIT_TOKEN)?;
                write!(f, "{} - help", HELP_TOKEN)
            }
            Self::Prompt(prompt) => f.write_str(prompt),
            Self::InvalidMove => write!(f, "Invalid move. Please try again."),
            Self::RoundResolved(report) => {
                writeln!(f, "Your move: {}", report.user_move)?;
                writeln!(f, "Computer move: {}", report.computer_move())?;
                writeln!(f, "{}", report.outcome)?;
                writeln!(f, "HMAC: {}", report.reveal.commitment.digest_hex())?;
                write!(f, "HMAC key: {}", report.reveal.key.to_hex())
            }
            Self::Exiting => write!(f, "Exiting..."),
            Self::MoveListKey(key) => write!(f, "Move list HMAC key: {}", key.to_hex()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::moves::Move;
    use crate::core::rules::Outcome;
    use crate::proof::commitment::Reveal;

    fn render(event: SessionEvent<'_>) -> String {
        let mut out = Vec::new();
        event.emit(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu() {
        let set = MoveSet::from_args(["Rock", "Paper", "Scissors"]).unwrap();
        assert_eq!(
            render(SessionEvent::Menu(&set)),
            "Available moves:\n1 - Rock\n2 - Paper\n3 - Scissors\n0 - exit\n? - help\n"
        );
    }

    #[test]
    fn test_prompt_has_no_newline() {
        assert_eq!(render(SessionEvent::Prompt("Enter your move: ")), "Enter your move: ");
    }

    #[test]
    fn test_round_report() {
        let key = SecretKey::from_hex(&"AB".repeat(32)).unwrap();
        let commitment = Commitment::seal(&key, b"Scissors");
        let report = RoundReport {
            user_move: Move::new("Rock").unwrap(),
            outcome: Outcome::Win,
            reveal: Reveal {
                computer_move: Move::new("Scissors").unwrap(),
                key: key.clone(),
                commitment,
            },
        };

        let expected = format!(
            "Your move: Rock\nComputer move: Scissors\nYou win!\nHMAC: {}\nHMAC key: {}\n",
            commitment.digest_hex(),
            "AB".repeat(32)
        );
        assert_eq!(render(SessionEvent::RoundResolved(&report)), expected);
    }

    #[test]
    fn test_simple_lines() {
        assert_eq!(render(SessionEvent::InvalidMove), "Invalid move. Please try again.\n");
        assert_eq!(render(SessionEvent::Exiting), "Exiting...\n");
    }
}
