use crate::capture::source::LandmarkSource;
use crate::config::{MatchConfig, NoDecisionPolicy};
use crate::engine::aggregator::GestureAggregator;
use crate::engine::chooser::{MoveChooser, RandomChooser};
use crate::engine::classify::{classifier_for, GestureClassifier};
use crate::engine::journal::{MatchJournalWriter, RoundJournalEntry};
use crate::engine::resolver::resolve;
use crate::engine::types::{
    CancelReason, Gesture, MatchReport, MatchTermination, RoundRecord, RoundResult, ScoreBoard,
};
use crate::error::ConfigError;
use crate::present::{NullSink, PresentationSink};
use chrono::Utc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// How a sampling window closed.
enum WindowClose {
    Decided {
        gesture: Gesture,
        samples_classified: u32,
    },
    NoDecision,
    Cancelled(CancelReason),
}

/// Drives one match: per round it opens a sampling window, pulls
/// observations from the landmark source, classifies and aggregates them,
/// draws the computer's move, resolves the outcome, and updates the scores
/// it exclusively owns.
///
/// A round walks AwaitingCapture -> Deciding -> Resolved; the match ends in
/// MatchComplete once the configured round count is reached, or in Cancelled
/// when the stop signal fires or the source fails for good. Cancellation is
/// cooperative and checked once per capture attempt.
pub struct MatchController {
    config: MatchConfig,
    source: Box<dyn LandmarkSource>,
    classifier: Box<dyn GestureClassifier>,
    chooser: Box<dyn MoveChooser>,
    sink: Box<dyn PresentationSink>,
    journal: Option<Box<dyn MatchJournalWriter>>,
    cancel_token: CancellationToken,
}

impl MatchController {
    /// Fails fast on invalid configuration; no match state is created and
    /// the source is never polled.
    pub fn new(config: MatchConfig, source: Box<dyn LandmarkSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        let classifier = classifier_for(config.classifier, config.orientation);
        Ok(Self {
            config,
            source,
            classifier,
            chooser: Box::new(RandomChooser::new()),
            sink: Box::new(NullSink),
            journal: None,
            cancel_token: CancellationToken::new(),
        })
    }

    pub fn with_classifier(mut self, classifier: Box<dyn GestureClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_chooser(mut self, chooser: Box<dyn MoveChooser>) -> Self {
        self.chooser = chooser;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn PresentationSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_journal(mut self, journal: Box<dyn MatchJournalWriter>) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub async fn run(mut self) -> MatchReport {
        let match_id = Uuid::new_v4();
        let mut scores = ScoreBoard::default();
        let mut rounds: Vec<RoundRecord> = Vec::new();
        tracing::info!(
            %match_id,
            rounds = self.config.rounds,
            classifier = self.classifier.name(),
            chooser = self.chooser.name(),
            "match started"
        );

        let mut round_number = 1;
        while round_number <= self.config.rounds {
            self.sink
                .round_started(round_number, self.config.rounds, &scores)
                .await;
            tracing::debug!(round = round_number, "awaiting capture");

            let close = self.sample_window().await;
            match close {
                WindowClose::Cancelled(reason) => {
                    return self
                        .finish(match_id, rounds, scores, MatchTermination::Cancelled(reason))
                        .await;
                }
                WindowClose::Decided {
                    gesture: player,
                    samples_classified,
                } => {
                    let computer = self.chooser.choose();
                    let outcome = resolve(player, computer);
                    scores.award(outcome);
                    let record = RoundRecord::played(round_number, player, computer, outcome);
                    tracing::info!(
                        round = round_number,
                        %player,
                        %computer,
                        %outcome,
                        "round resolved"
                    );
                    self.journal_round(match_id, &record, samples_classified);
                    rounds.push(record);
                    self.sink.round_resolved(&record, &scores).await;
                    round_number += 1;
                }
                WindowClose::NoDecision => match self.config.no_decision {
                    NoDecisionPolicy::Skip => {
                        tracing::info!(round = round_number, "no decision, skipping round");
                        rounds.push(RoundRecord::skipped(round_number));
                        self.sink.round_skipped(round_number, &scores).await;
                        round_number += 1;
                    }
                    NoDecisionPolicy::Retry => {
                        tracing::info!(round = round_number, "no decision, retrying round");
                    }
                },
            }
        }

        self.finish(match_id, rounds, scores, MatchTermination::Completed)
            .await
    }

    /// One sampling window: up to `samples_per_round` capture attempts,
    /// paced by `capture_interval`, closed early once the aggregator
    /// settles. A poll with no hand is a skipped tick, never an error.
    async fn sample_window(&mut self) -> WindowClose {
        let mut aggregator = GestureAggregator::new(self.config.aggregation);

        for attempt in 0..self.config.samples_per_round {
            if self.cancel_token.is_cancelled() {
                return WindowClose::Cancelled(CancelReason::OperatorStop);
            }
            match self.source.poll().await {
                Ok(Some(observation)) => {
                    let gesture = self.classifier.classify(&observation);
                    tracing::trace!(attempt, %gesture, "sample classified");
                    aggregator.observe(gesture);
                    if aggregator.settled() {
                        break;
                    }
                }
                Ok(None) => {
                    tracing::trace!(attempt, "no hand this tick");
                }
                Err(error) => {
                    return WindowClose::Cancelled(CancelReason::SourceFailed(error.to_string()));
                }
            }
            if !self.config.capture_interval.is_zero() {
                tokio::select! {
                    _ = self.cancel_token.cancelled() => {
                        return WindowClose::Cancelled(CancelReason::OperatorStop);
                    }
                    _ = tokio::time::sleep(self.config.capture_interval) => {}
                }
            }
        }

        tracing::debug!(
            samples_classified = aggregator.samples_classified(),
            "sampling window closed, deciding"
        );
        match aggregator.decide() {
            Some(gesture) => WindowClose::Decided {
                gesture,
                samples_classified: aggregator.samples_classified(),
            },
            None => WindowClose::NoDecision,
        }
    }

    fn journal_round(&mut self, match_id: Uuid, record: &RoundRecord, samples_classified: u32) {
        let Some(journal) = self.journal.as_mut() else {
            return;
        };
        let RoundResult::Played {
            player,
            computer,
            outcome,
        } = record.result
        else {
            return;
        };
        let entry = RoundJournalEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            match_id,
            round: record.number,
            player,
            computer,
            outcome,
            samples_classified,
        };
        if let Err(error) = journal.write_entry(entry) {
            tracing::warn!(%error, "failed to journal round");
        }
    }

    async fn finish(
        mut self,
        match_id: Uuid,
        rounds: Vec<RoundRecord>,
        scores: ScoreBoard,
        termination: MatchTermination,
    ) -> MatchReport {
        match &termination {
            MatchTermination::Completed => {
                tracing::info!(%match_id, %scores, "match complete");
            }
            MatchTermination::Cancelled(CancelReason::OperatorStop) => {
                tracing::info!(%match_id, %scores, "match cancelled by operator");
            }
            MatchTermination::Cancelled(CancelReason::SourceFailed(reason)) => {
                tracing::error!(%match_id, %scores, %reason, "match cancelled, source failed");
            }
        }
        if let Some(journal) = self.journal.as_mut() {
            if let Err(error) = journal.flush() {
                tracing::warn!(%error, "failed to flush journal");
            }
        }
        let report = MatchReport {
            match_id,
            winner: scores.leader(),
            rounds,
            scores,
            termination,
        };
        self.sink.match_finished(&report).await;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::fixtures;
    use crate::capture::landmark::HandObservation;
    use crate::capture::source::ScriptedSource;
    use crate::config::AggregationMode;
    use crate::engine::chooser::ScriptedChooser;
    use crate::engine::types::Outcome;
    use crate::error::CaptureError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn test_config() -> MatchConfig {
        MatchConfig {
            rounds: 3,
            samples_per_round: 4,
            capture_interval: Duration::ZERO,
            ..MatchConfig::default()
        }
    }

    /// Journal writer backed by shared storage so tests can inspect entries
    /// after the controller consumes the writer.
    struct SharedJournal(Arc<Mutex<Vec<RoundJournalEntry>>>);

    impl MatchJournalWriter for SharedJournal {
        fn write_entry(
            &mut self,
            entry: RoundJournalEntry,
        ) -> Result<(), crate::error::EngineError> {
            self.0.lock().unwrap().push(entry);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), crate::error::EngineError> {
            Ok(())
        }
    }

    /// Counts polls on the way through to a scripted source.
    struct CountingSource {
        inner: ScriptedSource,
        polls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl LandmarkSource for CountingSource {
        async fn poll(&mut self) -> Result<Option<HandObservation>, CaptureError> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            self.inner.poll().await
        }
    }

    /// Raises the stop signal from inside the capture loop at a given poll.
    struct CancellingSource {
        inner: ScriptedSource,
        cancel_on_poll: usize,
        polls: usize,
        token: CancellationToken,
    }

    #[async_trait]
    impl LandmarkSource for CancellingSource {
        async fn poll(&mut self) -> Result<Option<HandObservation>, CaptureError> {
            self.polls += 1;
            if self.polls == self.cancel_on_poll {
                self.token.cancel();
            }
            self.inner.poll().await
        }
    }

    /// Delivers scripted steps, then fails permanently.
    struct FailingSource {
        inner: ScriptedSource,
    }

    #[async_trait]
    impl LandmarkSource for FailingSource {
        async fn poll(&mut self) -> Result<Option<HandObservation>, CaptureError> {
            if self.inner.remaining() == 0 {
                return Err(CaptureError::SourceUnavailable(
                    "camera disconnected".to_string(),
                ));
            }
            self.inner.poll().await
        }
    }

    #[tokio::test]
    async fn three_round_match_with_a_skipped_round() {
        // Round 1: majority paper. Round 2: nothing usable. Round 3: scissors.
        let steps = vec![
            Some(fixtures::paper()),
            Some(fixtures::paper()),
            None,
            Some(fixtures::paper()),
            None,
            None,
            Some(fixtures::thumbs_out_fist()),
            None,
            Some(fixtures::scissors()),
            Some(fixtures::scissors()),
            Some(fixtures::scissors()),
            Some(fixtures::scissors()),
        ];
        let entries = Arc::new(Mutex::new(Vec::new()));
        let controller =
            MatchController::new(test_config(), Box::new(ScriptedSource::new(steps)))
                .unwrap()
                .with_chooser(Box::new(ScriptedChooser::new([
                    Gesture::Rock,
                    Gesture::Scissors,
                ])))
                .with_journal(Box::new(SharedJournal(entries.clone())));

        let report = controller.run().await;

        assert_eq!(report.termination, MatchTermination::Completed);
        assert_eq!(report.scores, ScoreBoard { player: 1, computer: 0 });
        assert_eq!(report.winner, crate::engine::types::MatchWinner::Player);
        assert_eq!(report.rounds.len(), 3);
        assert_eq!(
            report.rounds[0].result,
            RoundResult::Played {
                player: Gesture::Paper,
                computer: Gesture::Rock,
                outcome: Outcome::Player,
            }
        );
        // The skipped round still advanced the counter without scoring.
        assert_eq!(report.rounds[1], RoundRecord::skipped(2));
        assert_eq!(report.rounds[2].outcome(), Some(Outcome::Tie));

        // Only played rounds are journaled.
        let journaled: Vec<u32> = entries.lock().unwrap().iter().map(|e| e.round).collect();
        assert_eq!(journaled, vec![1, 3]);
    }

    #[tokio::test]
    async fn stop_signal_during_round_two_cancels_with_partial_scores() {
        let steps = vec![
            Some(fixtures::paper()),
            Some(fixtures::paper()),
            Some(fixtures::paper()),
            Some(fixtures::paper()),
            // Round 2 begins; the stop signal fires on its first poll.
            None,
        ];
        let token = CancellationToken::new();
        let source = CancellingSource {
            inner: ScriptedSource::new(steps),
            cancel_on_poll: 5,
            polls: 0,
            token: token.clone(),
        };
        let controller = MatchController::new(test_config(), Box::new(source))
            .unwrap()
            .with_chooser(Box::new(ScriptedChooser::new([Gesture::Rock])))
            .with_cancel_token(token);

        let report = controller.run().await;

        assert_eq!(
            report.termination,
            MatchTermination::Cancelled(CancelReason::OperatorStop)
        );
        assert_eq!(report.rounds.len(), 1);
        assert_eq!(report.scores, ScoreBoard { player: 1, computer: 0 });
        assert_eq!(report.winner, crate::engine::types::MatchWinner::Player);
    }

    #[tokio::test]
    async fn source_failure_cancels_the_match_with_a_reason() {
        let source = FailingSource {
            inner: ScriptedSource::repeating(fixtures::rock(), 4),
        };
        let controller = MatchController::new(test_config(), Box::new(source))
            .unwrap()
            .with_chooser(Box::new(ScriptedChooser::new([Gesture::Scissors])));

        let report = controller.run().await;

        match &report.termination {
            MatchTermination::Cancelled(CancelReason::SourceFailed(reason)) => {
                assert!(reason.contains("camera disconnected"));
            }
            other => panic!("expected source failure, got {other:?}"),
        }
        // Round 1 resolved before the failure and its score survives.
        assert_eq!(report.scores, ScoreBoard { player: 1, computer: 0 });
        assert_eq!(report.rounds.len(), 1);
    }

    #[tokio::test]
    async fn retry_policy_reopens_the_same_round() {
        let config = MatchConfig {
            rounds: 1,
            samples_per_round: 2,
            capture_interval: Duration::ZERO,
            no_decision: NoDecisionPolicy::Retry,
            ..MatchConfig::default()
        };
        // First window sees nothing; the retried window decides rock.
        let steps = vec![None, None, Some(fixtures::rock()), Some(fixtures::rock())];
        let controller = MatchController::new(config, Box::new(ScriptedSource::new(steps)))
            .unwrap()
            .with_chooser(Box::new(ScriptedChooser::new([Gesture::Scissors])));

        let report = controller.run().await;

        assert_eq!(report.rounds.len(), 1);
        assert_eq!(report.rounds[0].number, 1);
        assert_eq!(report.rounds[0].outcome(), Some(Outcome::Player));
        assert_eq!(report.scores, ScoreBoard { player: 1, computer: 0 });
    }

    #[tokio::test]
    async fn single_sample_mode_closes_the_window_early() {
        let config = MatchConfig {
            rounds: 1,
            samples_per_round: 10,
            capture_interval: Duration::ZERO,
            aggregation: AggregationMode::SingleSample,
            ..MatchConfig::default()
        };
        let polls = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            inner: ScriptedSource::new(vec![
                None,
                Some(fixtures::thumbs_out_fist()),
                Some(fixtures::rock()),
                Some(fixtures::rock()),
                Some(fixtures::rock()),
            ]),
            polls: polls.clone(),
        };
        let controller = MatchController::new(config, Box::new(source))
            .unwrap()
            .with_chooser(Box::new(ScriptedChooser::new([Gesture::Scissors])));

        let report = controller.run().await;

        assert_eq!(report.rounds[0].outcome(), Some(Outcome::Player));
        // Window closed on the first recognized gesture: empty tick, unknown
        // pose, then rock.
        assert_eq!(polls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn invalid_round_count_produces_no_match() {
        let config = MatchConfig {
            rounds: 0,
            ..test_config()
        };
        let result = MatchController::new(config, Box::new(ScriptedSource::new(vec![])));
        assert!(matches!(result, Err(ConfigError::InvalidRoundCount(0))));
    }
}
