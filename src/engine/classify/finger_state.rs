use crate::capture::landmark::{landmark_index as idx, HandObservation};
use crate::config::HandOrientation;

/// Per-digit extension state derived from one observation.
///
/// A non-thumb finger is "up" iff its tip sits above its PIP joint in
/// normalized image coordinates (smaller y is higher). The thumb folds
/// sideways, so it compares tip and IP joint on the horizontal axis, with
/// the direction set by the configured hand orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    pub fn from_observation(hand: &HandObservation, orientation: HandOrientation) -> Self {
        let thumb_tip = hand.landmark(idx::THUMB_TIP);
        let thumb_ip = hand.landmark(idx::THUMB_IP);
        let thumb = match orientation {
            HandOrientation::Right => thumb_tip.x < thumb_ip.x,
            HandOrientation::Left => thumb_tip.x > thumb_ip.x,
        };

        let finger_up = |tip: usize, pip: usize| hand.landmark(tip).y < hand.landmark(pip).y;

        Self {
            thumb,
            index: finger_up(idx::INDEX_FINGER_TIP, idx::INDEX_FINGER_PIP),
            middle: finger_up(idx::MIDDLE_FINGER_TIP, idx::MIDDLE_FINGER_PIP),
            ring: finger_up(idx::RING_FINGER_TIP, idx::RING_FINGER_PIP),
            pinky: finger_up(idx::PINKY_TIP, idx::PINKY_PIP),
        }
    }

    /// Number of extended digits, thumb included.
    pub fn extended_count(&self) -> u8 {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .into_iter()
            .filter(|&up| up)
            .count() as u8
    }

    pub fn all_down(&self) -> bool {
        self.extended_count() == 0
    }

    /// All four non-thumb fingers up, thumb state ignored.
    pub fn fingers_up(&self) -> bool {
        self.index && self.middle && self.ring && self.pinky
    }
}
