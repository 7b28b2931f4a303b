use crate::engine::types::{Gesture, Outcome};

/// Decide a round from the two moves.
///
/// The controller only calls this with real moves; `Unknown` dominates
/// nothing, so a contract violation degrades to a tie rather than a
/// fabricated win.
pub fn resolve(player: Gesture, computer: Gesture) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::Player
    } else if computer.beats(player) {
        Outcome::Computer
    } else {
        Outcome::Tie
    }
}
