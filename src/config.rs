use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which of the two classification strategies decides the player's gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifierStrategy {
    /// Exact finger-pattern match (rock = every digit folded, and so on).
    ShapePattern,
    /// Count extended digits and map 0/5/2 to rock/paper/scissors.
    FingerCount,
}

/// How per-frame classifications are folded into one decision per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationMode {
    /// First recognized gesture wins; the window closes early.
    SingleSample,
    /// Tally the whole window and require a strict majority.
    MajorityVote,
}

/// What the controller does with a round that produced no decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoDecisionPolicy {
    /// Advance the round counter without awarding points.
    Skip,
    /// Re-open the sampling window for the same round number.
    Retry,
}

/// Assumed hand orientation for the thumb-extension test.
///
/// The upstream detector mirrors the camera feed and the thumb rule compares
/// horizontal coordinates, so a left hand needs the comparison flipped.
/// Handedness is not read from observations; a fixed orientation is a known
/// limitation inherited from the reference behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOrientation {
    Right,
    Left,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    pub rounds: u32,
    pub samples_per_round: u32,
    pub capture_interval: Duration,
    pub classifier: ClassifierStrategy,
    pub aggregation: AggregationMode,
    pub no_decision: NoDecisionPolicy,
    pub orientation: HandOrientation,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: 3,
            // 60 attempts at ~30 fps covers the reference 2-second window.
            samples_per_round: 60,
            capture_interval: Duration::from_millis(33),
            classifier: ClassifierStrategy::ShapePattern,
            aggregation: AggregationMode::MajorityVote,
            no_decision: NoDecisionPolicy::Skip,
            orientation: HandOrientation::Right,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::InvalidRoundCount(self.rounds));
        }
        if self.samples_per_round == 0 {
            return Err(ConfigError::EmptySamplingWindow);
        }
        Ok(())
    }
}
