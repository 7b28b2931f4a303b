use chrono::{DateTime, Utc};

/// Hand landmark indices (MediaPipe hand landmark model convention).
///
/// Index assignments are stable across frames: wrist is 0, each finger runs
/// base-to-tip, fingertips land on 4/8/12/16/20.
pub mod landmark_index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_MCP: usize = 5;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP: usize = 13;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// One tracked hand point in normalized image coordinates.
///
/// x and y are in 0.0..=1.0 with smaller y visually higher; z is depth
/// relative to the wrist and unused by the bundled classifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// One detected hand at one instant: exactly 21 landmarks, indexed per
/// [`landmark_index`]. Observations are ephemeral and never persisted.
#[derive(Clone, Debug)]
pub struct HandObservation {
    pub landmarks: [Landmark; 21],
    pub captured_at: DateTime<Utc>,
}

impl HandObservation {
    pub fn new(landmarks: [Landmark; 21]) -> Self {
        Self {
            landmarks,
            captured_at: Utc::now(),
        }
    }

    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }
}
