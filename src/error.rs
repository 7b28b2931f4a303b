use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration Error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Capture Error: {0}")]
    CaptureError(#[from] CaptureError),
    #[error("Journal Error: {0}")]
    JournalError(String),
    #[error("Match task failed: {0}")]
    TaskError(String),
}

// Configuration Error Type. Fatal at match setup, surfaced before any capture.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("round count must be at least 1, got {0}")]
    InvalidRoundCount(u32),
    #[error("sampling window must allow at least one capture attempt")]
    EmptySamplingWindow,
    #[error("no landmark source was provided")]
    MissingLandmarkSource,
}

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("landmark source is unavailable: {0}")]
    SourceUnavailable(String),
    #[error("failed to read from landmark source: {0}")]
    ReadError(#[from] std::io::Error),
}
