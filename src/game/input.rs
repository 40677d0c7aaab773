//! Input Parsing
//!
//! Turns one line typed at the prompt into a [`Command`].

/// Token that ends the session.
pub const EXIT_TOKEN: &str = "0";

/// Token that prints the move menu.
pub const HELP_TOKEN: &str = "?";

/// A parsed prompt line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `0`: leave the game.
    Exit,
    /// `?`: show the menu.
    Help,
    /// A valid move, as a 0-based index into the move set.
    Play(usize),
    /// Anything else, kept verbatim for logging.
    Invalid(String),
}

impl Command {
    /// Parse a line against a move set of `move_count` moves.
    ///
    /// Surrounding whitespace is ignored. Moves are numbered from 1; signs,
    /// trailing text, overflow and out-of-range numbers are all invalid.
    pub fn parse(line: &str, move_count: usize) -> Self {
        let token = line.trim();

        match token {
            EXIT_TOKEN => return Self::Exit,
            HELP_TOKEN => return Self::Help,
            _ => {}
        }

        let is_number = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
        match token.parse::<usize>() {
            Ok(n) if is_number && (1..=move_count).contains(&n) => Self::Play(n - 1),
            _ => Self::Invalid(token.to_string()),
        }
    }
}
