use super::gesture::Gesture;
use super::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// How a round ended. A skipped round carries no fabricated move or outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Played {
        player: Gesture,
        computer: Gesture,
        outcome: Outcome,
    },
    /// The sampling window closed without a decision and the round was
    /// skipped without awarding points.
    Skipped,
}

/// One finalized round. Immutable once appended to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub number: u32,
    pub result: RoundResult,
}

impl RoundRecord {
    pub fn played(number: u32, player: Gesture, computer: Gesture, outcome: Outcome) -> Self {
        Self {
            number,
            result: RoundResult::Played {
                player,
                computer,
                outcome,
            },
        }
    }

    pub fn skipped(number: u32) -> Self {
        Self {
            number,
            result: RoundResult::Skipped,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.result {
            RoundResult::Played { outcome, .. } => Some(outcome),
            RoundResult::Skipped => None,
        }
    }
}
