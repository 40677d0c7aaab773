//! Win Relation
//!
//! Generalizes "rock beats scissors" to any odd number of moves.
//!
//! Moves are arranged in a cycle. Move `i` defeats the `(N-1)/2` moves that
//! follow it (indices `i+1 ..= i+(N-1)/2`, modulo `N`) and loses to the
//! `(N-1)/2` that precede it.
//! Distances `j` and `N-j` fall on opposite sides of that split, so every pair
//! of distinct moves has exactly one winner.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::moves::{Move, MoveSet};

/// Result of a round from the human player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Human wins.
    Win,
    /// Computer wins.
    Lose,
    /// Same move.
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "You win!"),
            Self::Lose => write!(f, "You lose!"),
            Self::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Mapping from each move to the set of moves it defeats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinRelation {
    wins: BTreeMap<Move, BTreeSet<Move>>,
}

impl WinRelation {
    /// Build the relation for a validated move set.
    ///
    /// O(N²) in time and space; N comes from the command line.
    pub fn build(moves: &MoveSet) -> Self {
        let n = moves.len();
        let half = n / 2;
        let mut wins = BTreeMap::new();

        for (i, mv) in moves.iter().enumerate() {
            let beaten: BTreeSet<Move> = (1..=half)
                .filter_map(|j| moves.get((i + j) % n))
                .cloned()
                .collect();
            wins.insert(mv.clone(), beaten);
        }

        Self { wins }
    }

    /// Does `a` beat `b`?
    pub fn beats(&self, a: &Move, b: &Move) -> bool {
        self.wins.get(a).map_or(false, |set| set.contains(b))
    }

    /// Moves defeated by `mv`, in label order.
    pub fn defeated_by<'a>(&'a self, mv: &Move) -> impl Iterator<Item = &'a Move> + 'a {
        self.wins.get(mv).into_iter().flat_map(|set| set.iter())
    }

    /// Number of moves covered.
    pub fn len(&self) -> usize {
        self.wins.len()
    }

    /// True if no moves are covered.
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }
}

/// Resolve a round.
///
/// Tie on identical moves, win if the human's move defeats the computer's,
/// lose otherwise.
pub fn resolve_round(user: &Move, computer: &Move, relation: &WinRelation) -> Outcome {
    if user == computer {
        Outcome::Tie
    } else if relation.beats(user, computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mv(label: &str) -> Move {
        Move::new(label).unwrap()
    }

    fn classic() -> (MoveSet, WinRelation) {
        let set = MoveSet::from_args(["Rock", "Paper", "Scissors"]).unwrap();
        let rel = WinRelation::build(&set);
        (set, rel)
    }

    #[test]
    fn test_classic_relation() {
        let (_, rel) = classic();
        assert!(rel.beats(&mv("Rock"), &mv("Paper")));
        assert!(rel.beats(&mv("Paper"), &mv("Scissors")));
        assert!(rel.beats(&mv("Scissors"), &mv("Rock")));
        assert!(!rel.beats(&mv("Paper"), &mv("Rock")));
        assert!(!rel.beats(&mv("Rock"), &mv("Scissors")));
    }

    #[test]
    fn test_classic_outcomes() {
        let (_, rel) = classic();
        assert_eq!(resolve_round(&mv("Rock"), &mv("Paper"), &rel), Outcome::Win);
        assert_eq!(resolve_round(&mv("Rock"), &mv("Scissors"), &rel), Outcome::Lose);
        assert_eq!(resolve_round(&mv("Paper"), &mv("Paper"), &rel), Outcome::Tie);
    }

    #[test]
    fn test_five_moves() {
        let set = MoveSet::from_args(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();
        let rel = WinRelation::build(&set);

        for m in set.iter() {
            assert_eq!(rel.defeated_by(m).count(), 2);
        }

        let rock: Vec<&str> = rel.defeated_by(&mv("Rock")).map(Move::as_str).collect();
        assert_eq!(rock, vec!["Paper", "Scissors"]);
        assert!(rel.beats(&mv("Scissors"), &mv("Lizard")));
        assert!(rel.beats(&mv("Scissors"), &mv("Spock")));
        assert!(rel.beats(&mv("Lizard"), &mv("Rock")));
        assert!(rel.beats(&mv("Spock"), &mv("Paper")));
        assert!(!rel.beats(&mv("Rock"), &mv("Lizard")));
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(Outcome::Win.to_string(), "You win!");
        assert_eq!(Outcome::Lose.to_string(), "You lose!");
        assert_eq!(Outcome::Tie.to_string(), "It's a tie!");
    }

    fn odd_move_set() -> impl Strategy<Value = MoveSet> {
        (1usize..=12).prop_map(|k| {
            let n = 2 * k + 1;
            MoveSet::from_args((0..n).map(|i| format!("m{}", i))).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_exactly_one_winner(set in odd_move_set()) {
            let rel = WinRelation::build(&set);
            for a in set.iter() {
                for b in set.iter() {
                    if a != b {
                        prop_assert!(rel.beats(a, b) ^ rel.beats(b, a));
                    }
                }
            }
        }

        #[test]
        fn prop_never_beats_itself(set in odd_move_set()) {
            let rel = WinRelation::build(&set);
            for m in set.iter() {
                prop_assert!(!rel.beats(m, m));
            }
        }

        #[test]
        fn prop_half_the_others(set in odd_move_set()) {
            let rel = WinRelation::build(&set);
            prop_assert_eq!(rel.len(), set.len());
            for m in set.iter() {
                prop_assert_eq!(rel.defeated_by(m).count(), (set.len() - 1) / 2);
            }
        }

        #[test]
        fn prop_resolution_is_antisymmetric(set in odd_move_set(), i in 0usize..25, j in 0usize..25) {
            let rel = WinRelation::build(&set);
            let a = set.get(i % set.len()).unwrap();
            let b = set.get(j % set.len()).unwrap();
            let forward = resolve_round(a, b, &rel);
            let backward = resolve_round(b, a, &rel);
            match forward {
                Outcome::Tie => prop_assert_eq!(backward, Outcome::Tie),
                Outcome::Win => prop_assert_eq!(backward, Outcome::Lose),
                Outcome::Lose => prop_assert_eq!(backward, Outcome::Win),
            }
        }
    }
}
