pub mod capture;
pub mod config;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod present;

pub use error::{CaptureError, ConfigError, EngineError};

pub use capture::{HandObservation, Landmark, LandmarkSource, ScriptedSource};
pub use config::{
    AggregationMode, ClassifierStrategy, HandOrientation, MatchConfig, NoDecisionPolicy,
};
pub use coordinator::{MatchCoordinator, MatchCoordinatorBuilder};
pub use engine::{
    Gesture, MatchController, MatchReport, MatchWinner, Outcome, RoundRecord, RoundResult,
    ScoreBoard,
};
pub use present::{NullSink, PresentationSink, TerminalPresenter};
