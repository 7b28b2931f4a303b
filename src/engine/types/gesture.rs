use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three canonical hand shapes, or `Unknown` when an observation
/// matched none of them. `Unknown` is never a valid player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Unknown,
}

impl Gesture {
    /// The fixed dominance cycle: rock beats scissors, scissors beats paper,
    /// paper beats rock. `Unknown` beats nothing and is beaten by nothing.
    pub fn beats(self, other: Gesture) -> bool {
        matches!(
            (self, other),
            (Gesture::Rock, Gesture::Scissors)
                | (Gesture::Scissors, Gesture::Paper)
                | (Gesture::Paper, Gesture::Rock)
        )
    }

    pub fn is_move(self) -> bool {
        self != Gesture::Unknown
    }

    pub const MOVES: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gesture::Rock => "rock",
            Gesture::Paper => "paper",
            Gesture::Scissors => "scissors",
            Gesture::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_is_cyclic() {
        assert!(Gesture::Rock.beats(Gesture::Scissors));
        assert!(Gesture::Scissors.beats(Gesture::Paper));
        assert!(Gesture::Paper.beats(Gesture::Rock));
        assert!(!Gesture::Scissors.beats(Gesture::Rock));
        assert!(!Gesture::Paper.beats(Gesture::Scissors));
        assert!(!Gesture::Rock.beats(Gesture::Paper));
    }

    #[test]
    fn unknown_neither_beats_nor_loses() {
        for gesture in Gesture::MOVES {
            assert!(!Gesture::Unknown.beats(gesture));
            assert!(!gesture.beats(Gesture::Unknown));
        }
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(Gesture::Scissors.to_string(), "scissors");
        assert_eq!(Gesture::Unknown.to_string(), "unknown");
    }
}
