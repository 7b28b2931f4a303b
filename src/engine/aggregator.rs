use crate::config::AggregationMode;
use crate::engine::types::Gesture;

/// Folds a round's stream of per-frame classifications into one decision.
///
/// State is scoped to a single round: the controller builds a fresh
/// aggregator when a sampling window opens and drops it once decided.
/// `Unknown` samples are never counted as candidate moves.
pub struct GestureAggregator {
    mode: AggregationMode,
    counts: [u32; 3],
    first: Option<Gesture>,
    classified: u32,
}

impl GestureAggregator {
    pub fn new(mode: AggregationMode) -> Self {
        Self {
            mode,
            counts: [0; 3],
            first: None,
            classified: 0,
        }
    }

    pub fn observe(&mut self, gesture: Gesture) {
        let slot = match gesture {
            Gesture::Rock => 0,
            Gesture::Paper => 1,
            Gesture::Scissors => 2,
            Gesture::Unknown => return,
        };
        self.counts[slot] += 1;
        self.classified += 1;
        if self.first.is_none() {
            self.first = Some(gesture);
        }
    }

    /// True once further samples cannot change the decision, letting the
    /// controller close the window early.
    pub fn settled(&self) -> bool {
        match self.mode {
            AggregationMode::SingleSample => self.first.is_some(),
            AggregationMode::MajorityVote => false,
        }
    }

    /// Resolve the window. `None` means no gesture can be attributed to the
    /// player: nothing classified, or (majority mode) a tie for the highest
    /// tally.
    pub fn decide(&self) -> Option<Gesture> {
        match self.mode {
            AggregationMode::SingleSample => self.first,
            AggregationMode::MajorityVote => {
                let best = self.counts.iter().copied().max().unwrap_or(0);
                if best == 0 {
                    return None;
                }
                let contenders = self.counts.iter().filter(|&&count| count == best).count();
                if contenders > 1 {
                    return None;
                }
                let winner = self.counts.iter().position(|&count| count == best)?;
                Some(Gesture::MOVES[winner])
            }
        }
    }

    /// How many samples classified as a real move this round.
    pub fn samples_classified(&self) -> u32 {
        self.classified
    }
}
