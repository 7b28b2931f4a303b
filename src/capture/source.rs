use crate::capture::landmark::HandObservation;
use crate::error::CaptureError;
use async_trait::async_trait;
use std::collections::VecDeque;

/// Supplier of hand observations, polled once per capture attempt.
///
/// `Ok(None)` means no hand was detected this tick and the caller should
/// simply try again on its next cycle. An `Err` means the source is gone for
/// good (camera unplugged, detector process died) and the match cannot
/// continue.
#[async_trait]
pub trait LandmarkSource: Send {
    async fn poll(&mut self) -> Result<Option<HandObservation>, CaptureError>;
}

/// Fixture-playback source: yields a scripted step per poll, then nothing.
///
/// Stands in for a camera in the demo binary and in end-to-end tests.
pub struct ScriptedSource {
    steps: VecDeque<Option<HandObservation>>,
}

impl ScriptedSource {
    pub fn new(steps: impl IntoIterator<Item = Option<HandObservation>>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// The same observation for `count` consecutive polls.
    pub fn repeating(observation: HandObservation, count: usize) -> Self {
        Self::new(std::iter::repeat(Some(observation)).take(count))
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    pub fn extend(&mut self, steps: impl IntoIterator<Item = Option<HandObservation>>) {
        self.steps.extend(steps);
    }
}

#[async_trait]
impl LandmarkSource for ScriptedSource {
    async fn poll(&mut self) -> Result<Option<HandObservation>, CaptureError> {
        Ok(self.steps.pop_front().flatten())
    }
}
