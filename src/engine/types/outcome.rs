use serde::{Deserialize, Serialize};
use std::fmt;

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Player,
    Computer,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Player => "player",
            Outcome::Computer => "computer",
            Outcome::Tie => "tie",
        };
        write!(f, "{name}")
    }
}
