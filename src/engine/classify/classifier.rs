use super::finger_state::FingerState;
use crate::capture::landmark::HandObservation;
use crate::config::{ClassifierStrategy, HandOrientation};
use crate::engine::types::Gesture;

/// Strategy pattern for mapping one hand observation to a gesture.
///
/// Classification is total: degenerate input still yields a gesture, falling
/// back to `Unknown` when no rule matches.
pub trait GestureClassifier: Send + Sync {
    fn classify(&self, hand: &HandObservation) -> Gesture;
    fn name(&self) -> &'static str;
}

/// Build the classifier a [`ClassifierStrategy`] selects.
pub fn classifier_for(
    strategy: ClassifierStrategy,
    orientation: HandOrientation,
) -> Box<dyn GestureClassifier> {
    match strategy {
        ClassifierStrategy::ShapePattern => Box::new(ShapePatternClassifier::new(orientation)),
        ClassifierStrategy::FingerCount => Box::new(FingerCountClassifier::new(orientation)),
    }
}

/// Exact-pattern classifier: matches the three canonical digit patterns in
/// precedence order rock, paper, scissors.
pub struct ShapePatternClassifier {
    orientation: HandOrientation,
}

impl ShapePatternClassifier {
    pub fn new(orientation: HandOrientation) -> Self {
        Self { orientation }
    }
}

impl GestureClassifier for ShapePatternClassifier {
    fn classify(&self, hand: &HandObservation) -> Gesture {
        let fingers = FingerState::from_observation(hand, self.orientation);

        // Rock: every digit folded, thumb included.
        if fingers.all_down() {
            return Gesture::Rock;
        }
        // Paper: all four fingers up, thumb state ignored.
        if fingers.fingers_up() {
            return Gesture::Paper;
        }
        // Scissors: exactly index and middle up.
        if fingers.index && fingers.middle && !fingers.ring && !fingers.pinky {
            return Gesture::Scissors;
        }
        Gesture::Unknown
    }

    fn name(&self) -> &'static str {
        "ShapePatternClassifier"
    }
}

/// Count-based classifier: maps the number of extended digits to a gesture
/// (0 = rock, 5 = paper, 2 = scissors).
pub struct FingerCountClassifier {
    orientation: HandOrientation,
}

impl FingerCountClassifier {
    pub fn new(orientation: HandOrientation) -> Self {
        Self { orientation }
    }
}

impl GestureClassifier for FingerCountClassifier {
    fn classify(&self, hand: &HandObservation) -> Gesture {
        let fingers = FingerState::from_observation(hand, self.orientation);
        match fingers.extended_count() {
            0 => Gesture::Rock,
            5 => Gesture::Paper,
            2 => Gesture::Scissors,
            _ => Gesture::Unknown,
        }
    }

    fn name(&self) -> &'static str {
        "FingerCountClassifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::fixtures;

    fn pattern() -> ShapePatternClassifier {
        ShapePatternClassifier::new(HandOrientation::Right)
    }

    fn count() -> FingerCountClassifier {
        FingerCountClassifier::new(HandOrientation::Right)
    }

    #[test]
    fn both_strategies_agree_on_canonical_poses() {
        let cases = [
            (fixtures::rock(), Gesture::Rock),
            (fixtures::paper(), Gesture::Paper),
            (fixtures::scissors(), Gesture::Scissors),
        ];
        for (hand, expected) in cases {
            assert_eq!(pattern().classify(&hand), expected);
            assert_eq!(count().classify(&hand), expected);
        }
    }

    #[test]
    fn thumbs_out_fist_is_unknown_under_both_strategies() {
        let hand = fixtures::thumbs_out_fist();
        // Pattern: the extended thumb spoils rock. Count: one digit maps nowhere.
        assert_eq!(pattern().classify(&hand), Gesture::Unknown);
        assert_eq!(count().classify(&hand), Gesture::Unknown);
    }

    #[test]
    fn folded_thumb_paper_splits_the_strategies() {
        let hand = fixtures::folded_thumb_paper();
        assert_eq!(pattern().classify(&hand), Gesture::Paper);
        assert_eq!(count().classify(&hand), Gesture::Unknown);
    }

    #[test]
    fn scissors_requires_ring_and_pinky_down() {
        let hand = fixtures::pose(false, [true, true, true, false]);
        assert_eq!(pattern().classify(&hand), Gesture::Unknown);
    }

    #[test]
    fn three_fingers_counts_to_unknown() {
        let hand = fixtures::pose(true, [true, true, false, false]);
        assert_eq!(count().classify(&hand), Gesture::Unknown);
    }

    #[test]
    fn degenerate_input_still_terminates() {
        let hand = fixtures::degenerate();
        // Identical points read as every digit folded.
        assert_eq!(pattern().classify(&hand), Gesture::Rock);
        assert_eq!(count().classify(&hand), Gesture::Rock);
    }

    #[test]
    fn mirrored_hand_classifies_under_flipped_orientation() {
        let hand = fixtures::mirrored(&fixtures::paper());
        let classifier = ShapePatternClassifier::new(HandOrientation::Left);
        assert_eq!(classifier.classify(&hand), Gesture::Paper);
    }

    #[test]
    fn strategy_lookup_builds_the_named_classifier() {
        let shape = classifier_for(ClassifierStrategy::ShapePattern, HandOrientation::Right);
        let fingers = classifier_for(ClassifierStrategy::FingerCount, HandOrientation::Right);
        assert_eq!(shape.name(), "ShapePatternClassifier");
        assert_eq!(fingers.name(), "FingerCountClassifier");
    }
}
