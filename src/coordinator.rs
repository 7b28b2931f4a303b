use crate::capture::source::LandmarkSource;
use crate::config::{
    AggregationMode, ClassifierStrategy, HandOrientation, MatchConfig, NoDecisionPolicy,
};
use crate::engine::chooser::MoveChooser;
use crate::engine::classify::GestureClassifier;
use crate::engine::controller::MatchController;
use crate::engine::journal::MatchJournalWriter;
use crate::engine::types::MatchReport;
use crate::error::{ConfigError, EngineError};
use crate::present::PresentationSink;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Runs a match on its own task and hands out the stop signal.
pub struct MatchCoordinator {
    match_task: Option<tokio::task::JoinHandle<MatchReport>>,
    cancel_token: CancellationToken,
}

impl MatchCoordinator {
    fn new(controller: MatchController) -> Self {
        let cancel_token = controller.cancel_token();
        Self {
            match_task: Some(tokio::spawn(controller.run())),
            cancel_token,
        }
    }

    /// Raise the stop signal. Honored cooperatively at the controller's next
    /// capture attempt; the round in flight is not completed.
    pub fn stop(&self) {
        self.cancel_token.cancel();
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Wait for the match to reach a terminal state and take its report.
    pub async fn join(mut self) -> Result<MatchReport, EngineError> {
        let task = self
            .match_task
            .take()
            .ok_or_else(|| EngineError::TaskError("match already joined".to_string()))?;
        task.await.map_err(|e| EngineError::TaskError(e.to_string()))
    }
}

impl Drop for MatchCoordinator {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

pub struct MatchCoordinatorBuilder {
    config: MatchConfig,
    source: Option<Box<dyn LandmarkSource>>,
    classifier: Option<Box<dyn GestureClassifier>>,
    chooser: Option<Box<dyn MoveChooser>>,
    sink: Option<Box<dyn PresentationSink>>,
    journal: Option<Box<dyn MatchJournalWriter>>,
    cancel_token: Option<CancellationToken>,
}

impl MatchCoordinatorBuilder {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            source: None,
            classifier: None,
            chooser: None,
            sink: None,
            journal: None,
            cancel_token: None,
        }
    }

    // Sets the round count, this will override the default configuration.
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.config.rounds = rounds;
        self
    }

    // Sets the capture attempts per round, this will override the default configuration.
    pub fn samples_per_round(mut self, samples: u32) -> Self {
        self.config.samples_per_round = samples;
        self
    }

    // Sets the pacing between capture attempts, this will override the default configuration.
    pub fn capture_interval(mut self, interval: Duration) -> Self {
        self.config.capture_interval = interval;
        self
    }

    pub fn classifier_strategy(mut self, strategy: ClassifierStrategy) -> Self {
        self.config.classifier = strategy;
        self
    }

    pub fn aggregation(mut self, mode: AggregationMode) -> Self {
        self.config.aggregation = mode;
        self
    }

    pub fn no_decision_policy(mut self, policy: NoDecisionPolicy) -> Self {
        self.config.no_decision = policy;
        self
    }

    pub fn orientation(mut self, orientation: HandOrientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn source(mut self, source: Box<dyn LandmarkSource>) -> Self {
        self.source = Some(source);
        self
    }

    // Overrides the classifier the configured strategy would select.
    pub fn classifier(mut self, classifier: Box<dyn GestureClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn chooser(mut self, chooser: Box<dyn MoveChooser>) -> Self {
        self.chooser = Some(chooser);
        self
    }

    pub fn sink(mut self, sink: Box<dyn PresentationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn journal(mut self, journal: Box<dyn MatchJournalWriter>) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = Some(token);
        self
    }

    /// Validate the configuration, wire the controller, and spawn the match
    /// task. Configuration errors surface here, before any capture.
    pub fn build(self) -> Result<MatchCoordinator, EngineError> {
        let source = self.source.ok_or(ConfigError::MissingLandmarkSource)?;
        let mut controller = MatchController::new(self.config, source)?;
        if let Some(classifier) = self.classifier {
            controller = controller.with_classifier(classifier);
        }
        if let Some(chooser) = self.chooser {
            controller = controller.with_chooser(chooser);
        }
        if let Some(sink) = self.sink {
            controller = controller.with_sink(sink);
        }
        if let Some(journal) = self.journal {
            controller = controller.with_journal(journal);
        }
        if let Some(token) = self.cancel_token {
            controller = controller.with_cancel_token(token);
        }
        Ok(MatchCoordinator::new(controller))
    }
}
