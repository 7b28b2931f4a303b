mod gesture;
mod outcome;
mod round;
mod score;

pub use gesture::Gesture;
pub use outcome::Outcome;
pub use round::{RoundRecord, RoundResult};
pub use score::{CancelReason, MatchReport, MatchTermination, MatchWinner, ScoreBoard};
