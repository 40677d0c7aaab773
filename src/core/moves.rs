//! Move Labels and the Session Move Set
//!
//! A move is an opaque, case-sensitive label. The move set is fixed at
//! session start from the command line and never mutated afterwards.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use super::rng::{pick_index, SessionRng};

/// Minimum number of moves in a session.
pub const MIN_MOVES: usize = 3;

/// A single selectable move.
///
/// Identity is the exact label. Empty labels are rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move(String);

impl Move {
    /// Create a move from a label.
    pub fn new(label: impl Into<String>) -> Result<Self, MoveSetError> {
        let label = label.into();
        if label.is_empty() {
            return Err(MoveSetError::EmptyMove);
        }
        Ok(Self(label))
    }

    /// Get the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the label bytes (the commitment input).
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised while validating the move set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// Fewer than three moves supplied.
    #[error("The number of moves must be an odd number ≥ 3 (got {got}).")]
    TooFewMoves {
        /// Number of moves supplied.
        got: usize,
    },

    /// An even number of moves supplied.
    #[error("The number of moves must be an odd number ≥ 3 (got {got}).")]
    EvenMoveCount {
        /// Number of moves supplied.
        got: usize,
    },

    /// A move label was empty.
    #[error("Moves must not be empty.")]
    EmptyMove,

    /// The same label appeared twice.
    #[error("Moves must be unique ({label:?} given at positions {first} and {second}).")]
    DuplicateMove {
        /// The repeated label.
        label: String,
        /// 1-based position of the first occurrence.
        first: usize,
        /// 1-based position of the repeat.
        second: usize,
    },
}

/// The ordered, validated move list for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    /// Validate command line arguments into a move set.
    ///
    /// Rejects fewer than three moves, an even count, empty labels and
    /// duplicates, in that order.
    pub fn from_args<I, S>(args: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = args.into_iter().map(Into::into).collect();

        if labels.len() < MIN_MOVES {
            return Err(MoveSetError::TooFewMoves { got: labels.len() });
        }
        if labels.len() % 2 == 0 {
            return Err(MoveSetError::EvenMoveCount { got: labels.len() });
        }

        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for (i, label) in labels.iter().enumerate() {
            if let Some(first) = seen.insert(label.as_str(), i + 1) {
                return Err(MoveSetError::DuplicateMove {
                    label: label.clone(),
                    first,
                    second: i + 1,
                });
            }
        }

        let moves = labels
            .into_iter()
            .map(Move::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { moves })
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false for a validated set; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// Pick a move uniformly at random.
    ///
    /// A validated set always has at least [`MIN_MOVES`] entries.
    pub fn pick<R: SessionRng>(&self, rng: &mut R) -> &Move {
        &self.moves[pick_index(rng, self.moves.len())]
    }

    /// Iterate moves in session order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// All labels joined with a separator.
    pub fn labels_joined(&self, sep: &str) -> String {
        self.moves
            .iter()
            .map(Move::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_valid_move_set() {
        let set = MoveSet::from_args(["Rock", "Paper", "Scissors"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0).unwrap().as_str(), "Rock");
        assert_eq!(set.get(2).unwrap().as_str(), "Scissors");
        assert!(set.get(3).is_none());
        assert_eq!(set.labels_joined(":"), "Rock:Paper:Scissors");
    }

    #[test]
    fn test_rejects_too_few() {
        assert_eq!(
            MoveSet::from_args(["Rock", "Paper"]),
            Err(MoveSetError::TooFewMoves { got: 2 })
        );
        assert_eq!(
            MoveSet::from_args(Vec::<String>::new()),
            Err(MoveSetError::TooFewMoves { got: 0 })
        );
    }

    #[test]
    fn test_rejects_even_count() {
        assert_eq!(
            MoveSet::from_args(["a", "b", "c", "d"]),
            Err(MoveSetError::EvenMoveCount { got: 4 })
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = MoveSet::from_args(["Rock", "Paper", "Rock"]).unwrap_err();
        assert_eq!(
            err,
            MoveSetError::DuplicateMove {
                label: "Rock".to_string(),
                first: 1,
                second: 3,
            }
        );
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let set = MoveSet::from_args(["rock", "Rock", "ROCK"]).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_rejects_empty_label() {
        assert_eq!(
            MoveSet::from_args(["Rock", "", "Paper"]),
            Err(MoveSetError::EmptyMove)
        );
        assert_eq!(Move::new(""), Err(MoveSetError::EmptyMove));
    }

    #[test]
    fn test_pick_reaches_every_move() {
        let set = MoveSet::from_args(["Rock", "Paper", "Scissors"]).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let mut seen = BTreeMap::new();
        for _ in 0..300 {
            *seen.entry(set.pick(&mut rng).as_str()).or_insert(0u32) += 1;
        }
        assert_eq!(seen.len(), 3);
    }
}
