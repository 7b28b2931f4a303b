pub mod aggregator;
pub mod chooser;
pub mod classify;
pub mod controller;
pub mod journal;
pub mod resolver;
pub mod types;

pub use aggregator::GestureAggregator;
pub use chooser::{MoveChooser, RandomChooser, ScriptedChooser};
pub use classify::{FingerCountClassifier, GestureClassifier, ShapePatternClassifier};
pub use controller::MatchController;
pub use journal::{InMemoryJournalWriter, JsonLinesJournalWriter, MatchJournalWriter};
pub use resolver::resolve;
pub use types::{
    CancelReason, Gesture, MatchReport, MatchTermination, MatchWinner, Outcome, RoundRecord,
    RoundResult, ScoreBoard,
};
