use super::outcome::Outcome;
use super::round::RoundRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Running score tallies, owned and mutated only by the match controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub player: u32,
    pub computer: u32,
}

impl ScoreBoard {
    pub fn award(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Player => self.player += 1,
            Outcome::Computer => self.computer += 1,
            Outcome::Tie => {}
        }
    }

    pub fn leader(&self) -> MatchWinner {
        if self.player > self.computer {
            MatchWinner::Player
        } else if self.computer > self.player {
            MatchWinner::Computer
        } else {
            MatchWinner::Tie
        }
    }
}

impl fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: {}  Computer: {}", self.player, self.computer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchWinner {
    Player,
    Computer,
    Tie,
}

/// Why a match ended before its configured round count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancelReason {
    /// Operator raised the stop signal.
    OperatorStop,
    /// The landmark source failed permanently mid-match.
    SourceFailed(String),
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::OperatorStop => write!(f, "stopped by operator"),
            CancelReason::SourceFailed(reason) => {
                write!(f, "landmark source failed: {reason}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTermination {
    Completed,
    Cancelled(CancelReason),
}

/// Final state of a match: every finalized round, the tallies, and the
/// winner computed from them (partial tallies when cancelled early).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_id: Uuid,
    pub rounds: Vec<RoundRecord>,
    pub scores: ScoreBoard,
    pub winner: MatchWinner,
    pub termination: MatchTermination,
}

impl MatchReport {
    pub fn is_cancelled(&self) -> bool {
        matches!(self.termination, MatchTermination::Cancelled(_))
    }
}
