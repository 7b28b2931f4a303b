mod classifier;
mod finger_state;

pub use classifier::{
    classifier_for, FingerCountClassifier, GestureClassifier, ShapePatternClassifier,
};
pub use finger_state::FingerState;
