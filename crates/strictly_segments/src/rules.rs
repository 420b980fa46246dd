//! Pure rule functions: angle mapping and leader selection.

use crate::types::{PlayerId, Scoreboard, Segment};
use tracing::instrument;

/// Normalizes an angle in degrees into [0, 360).
///
/// Non-finite input maps to 0.
pub fn normalize_angle(angle_degrees: f64) -> f64 {
    if !angle_degrees.is_finite() {
        return 0.0;
    }
    let angle = angle_degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Maps a click angle to the arc it toggles.
///
/// Click order runs opposite to draw order: [0,120) toggles the third arc,
/// [120,240) the second, [240,360) the first.
#[instrument]
pub fn segment_for_angle(angle_degrees: f64) -> Segment {
    let angle = normalize_angle(angle_degrees);
    if angle < 120.0 {
        Segment::Third
    } else if angle < 240.0 {
        Segment::Second
    } else {
        Segment::First
    }
}

/// Returns the leading player and their score.
///
/// Ties go to the lowest player number.
#[instrument(skip(board))]
pub fn leader(board: &Scoreboard) -> (PlayerId, u32) {
    let mut best = (PlayerId::FIRST, 0);
    for (index, &score) in board.scores().iter().enumerate() {
        if index == 0 || score > best.1 {
            best = (PlayerId::from_index(index), score);
        }
    }
    best
}
