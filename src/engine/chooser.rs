use crate::engine::types::Gesture;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Strategy pattern for producing the computer's move each round.
pub trait MoveChooser: Send {
    fn choose(&mut self) -> Gesture;
    fn name(&self) -> &'static str;
}

/// Uniform random chooser over rock/paper/scissors, independent across
/// calls. The random source is injected so tests can seed it.
pub struct RandomChooser<R = StdRng> {
    rng: R,
}

impl RandomChooser<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomChooser<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> RandomChooser<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> MoveChooser for RandomChooser<R> {
    fn choose(&mut self) -> Gesture {
        Gesture::MOVES[self.rng.random_range(0..Gesture::MOVES.len())]
    }

    fn name(&self) -> &'static str {
        "RandomChooser"
    }
}

/// Plays back a fixed move sequence, for testing and scripted demos.
/// Repeats the last move once the script runs out.
pub struct ScriptedChooser {
    moves: VecDeque<Gesture>,
    last: Gesture,
}

impl ScriptedChooser {
    pub fn new(moves: impl IntoIterator<Item = Gesture>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            last: Gesture::Rock,
        }
    }
}

impl MoveChooser for ScriptedChooser {
    fn choose(&mut self) -> Gesture {
        if let Some(gesture) = self.moves.pop_front() {
            self.last = gesture;
        }
        self.last
    }

    fn name(&self) -> &'static str {
        "ScriptedChooser"
    }
}
