//! Canonical hand poses for tests and scripted demos.
//!
//! Geometry is a plausible right hand in a mirrored feed: fingers hang from
//! the top of the palm, an "up" fingertip sits well above its PIP joint, an
//! extended thumb tip sits further left than the thumb IP joint.

use crate::capture::landmark::{landmark_index as idx, HandObservation, Landmark};

const FINGER_COLUMNS: [f32; 4] = [0.44, 0.50, 0.56, 0.62];

/// Build an observation with each digit explicitly extended or folded.
///
/// `fingers_up` is index/middle/ring/pinky in that order.
pub fn pose(thumb_extended: bool, fingers_up: [bool; 4]) -> HandObservation {
    let mut points = [Landmark::default(); 21];

    points[idx::WRIST] = Landmark::new(0.52, 0.85);

    points[idx::THUMB_CMC] = Landmark::new(0.40, 0.76);
    points[idx::THUMB_MCP] = Landmark::new(0.35, 0.69);
    points[idx::THUMB_IP] = Landmark::new(0.32, 0.63);
    points[idx::THUMB_TIP] = if thumb_extended {
        Landmark::new(0.24, 0.60)
    } else {
        Landmark::new(0.40, 0.66)
    };

    let fingers = [
        (idx::INDEX_FINGER_MCP, fingers_up[0]),
        (idx::MIDDLE_FINGER_MCP, fingers_up[1]),
        (idx::RING_FINGER_MCP, fingers_up[2]),
        (idx::PINKY_MCP, fingers_up[3]),
    ];
    for (finger, (mcp, up)) in fingers.into_iter().enumerate() {
        let x = FINGER_COLUMNS[finger];
        points[mcp] = Landmark::new(x, 0.65);
        points[mcp + 1] = Landmark::new(x, 0.55);
        if up {
            points[mcp + 2] = Landmark::new(x, 0.45);
            points[mcp + 3] = Landmark::new(x, 0.35);
        } else {
            // Curled back toward the palm, tip below its PIP joint.
            points[mcp + 2] = Landmark::new(x, 0.60);
            points[mcp + 3] = Landmark::new(x, 0.67);
        }
    }

    HandObservation::new(points)
}

/// Closed fist: every digit folded.
pub fn rock() -> HandObservation {
    pose(false, [false; 4])
}

/// Open palm: every digit extended.
pub fn paper() -> HandObservation {
    pose(true, [true; 4])
}

/// Index and middle up, ring and pinky folded.
pub fn scissors() -> HandObservation {
    pose(false, [true, true, false, false])
}

/// Fist with the thumb sticking out sideways. Neither strategy recognizes it.
pub fn thumbs_out_fist() -> HandObservation {
    pose(true, [false; 4])
}

/// All four fingers up but the thumb folded across the palm. The two
/// strategies disagree on this one: pattern says paper, count says unknown.
pub fn folded_thumb_paper() -> HandObservation {
    pose(false, [true; 4])
}

/// Every landmark collapsed onto one point. Classifiers must still terminate.
pub fn degenerate() -> HandObservation {
    HandObservation::new([Landmark::new(0.5, 0.5); 21])
}

/// Horizontal mirror of an observation, as if the hand switched sides.
pub fn mirrored(observation: &HandObservation) -> HandObservation {
    let mut points = observation.landmarks;
    for point in &mut points {
        point.x = 1.0 - point.x;
    }
    HandObservation::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rock_pose_has_every_fingertip_below_its_pip() {
        let hand = rock();
        for (tip, pip) in [
            (idx::INDEX_FINGER_TIP, idx::INDEX_FINGER_PIP),
            (idx::MIDDLE_FINGER_TIP, idx::MIDDLE_FINGER_PIP),
            (idx::RING_FINGER_TIP, idx::RING_FINGER_PIP),
            (idx::PINKY_TIP, idx::PINKY_PIP),
        ] {
            assert!(hand.landmark(tip).y > hand.landmark(pip).y);
        }
    }

    #[test]
    fn paper_pose_has_every_fingertip_above_its_pip() {
        let hand = paper();
        for (tip, pip) in [
            (idx::INDEX_FINGER_TIP, idx::INDEX_FINGER_PIP),
            (idx::MIDDLE_FINGER_TIP, idx::MIDDLE_FINGER_PIP),
            (idx::RING_FINGER_TIP, idx::RING_FINGER_PIP),
            (idx::PINKY_TIP, idx::PINKY_PIP),
        ] {
            assert!(hand.landmark(tip).y < hand.landmark(pip).y);
        }
    }

    #[test]
    fn mirroring_flips_the_thumb_axis() {
        let hand = paper();
        let flipped = mirrored(&hand);
        let tip = hand.landmark(idx::THUMB_TIP).x;
        let ip = hand.landmark(idx::THUMB_IP).x;
        assert!(tip < ip);
        assert!(flipped.landmark(idx::THUMB_TIP).x > flipped.landmark(idx::THUMB_IP).x);
    }
}
