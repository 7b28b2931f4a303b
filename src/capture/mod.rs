pub mod fixtures;
pub mod landmark;
pub mod source;

pub use landmark::{landmark_index, HandObservation, Landmark};
pub use source::{LandmarkSource, ScriptedSource};
