use crate::engine::types::{MatchReport, MatchTermination, MatchWinner, RoundRecord, RoundResult, ScoreBoard};
use crate::present::sink::PresentationSink;
use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Prints rounds and the final summary to stdout, in the vocabulary the
/// reference game used.
///
/// The pause after each resolved round (the original held the result frame
/// on screen for two seconds) lives here, not in the controller, and is cut
/// short when the match is cancelled.
pub struct TerminalPresenter {
    result_hold: Duration,
    cancel_token: CancellationToken,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            result_hold: Duration::ZERO,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Hold each resolved round on screen for `duration`.
    pub fn with_result_hold(mut self, duration: Duration) -> Self {
        self.result_hold = duration;
        self
    }

    /// Token that cuts display holds short.
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    async fn hold(&self) {
        if self.result_hold.is_zero() {
            return;
        }
        tokio::select! {
            _ = self.cancel_token.cancelled() => {}
            _ = tokio::time::sleep(self.result_hold) => {}
        }
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PresentationSink for TerminalPresenter {
    async fn round_started(&mut self, round: u32, total_rounds: u32, scores: &ScoreBoard) {
        println!("Round: {round}/{total_rounds}  ({scores})");
        println!("Show your hand!");
    }

    async fn round_resolved(&mut self, record: &RoundRecord, scores: &ScoreBoard) {
        if let RoundResult::Played {
            player,
            computer,
            outcome,
        } = record.result
        {
            println!("Your gesture: {player}");
            println!("Computer gesture: {computer}");
            println!("Result: {outcome}  ({scores})");
        }
        self.hold().await;
    }

    async fn round_skipped(&mut self, round: u32, scores: &ScoreBoard) {
        println!("Round {round}: no gesture detected, skipping.  ({scores})");
    }

    async fn match_finished(&mut self, report: &MatchReport) {
        if let MatchTermination::Cancelled(reason) = &report.termination {
            println!("\nMatch cancelled: {reason}");
        }
        println!("\nFinal Scores:");
        println!("Player: {}", report.scores.player);
        println!("Computer: {}", report.scores.computer);
        match report.winner {
            MatchWinner::Player => println!("You win the game!"),
            MatchWinner::Computer => println!("Computer wins the game!"),
            MatchWinner::Tie => println!("It's a tie!"),
        }
    }
}
