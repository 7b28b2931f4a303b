use crate::engine::types::{MatchReport, RoundRecord, ScoreBoard};
use async_trait::async_trait;

/// Receives display data as the match progresses.
///
/// The controller never depends on how (or whether) anything is rendered;
/// sinks own their own pacing, including any result-display holds.
#[async_trait]
pub trait PresentationSink: Send {
    /// A round's sampling window is about to open.
    async fn round_started(&mut self, round: u32, total_rounds: u32, scores: &ScoreBoard);

    /// A round finalized with both moves and an outcome.
    async fn round_resolved(&mut self, record: &RoundRecord, scores: &ScoreBoard);

    /// A round closed without a decision and was skipped.
    async fn round_skipped(&mut self, round: u32, scores: &ScoreBoard);

    /// The match reached a terminal state.
    async fn match_finished(&mut self, report: &MatchReport);
}

/// Sink that discards everything, for headless use and tests.
#[derive(Debug, Default)]
pub struct NullSink;

#[async_trait]
impl PresentationSink for NullSink {
    async fn round_started(&mut self, _round: u32, _total_rounds: u32, _scores: &ScoreBoard) {}

    async fn round_resolved(&mut self, _record: &RoundRecord, _scores: &ScoreBoard) {}

    async fn round_skipped(&mut self, _round: u32, _scores: &ScoreBoard) {}

    async fn match_finished(&mut self, _report: &MatchReport) {}
}
