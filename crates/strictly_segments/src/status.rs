//! Values the core hands to its host for drawing and status display.
//!
//! The core never formats text; the host decides how these read on screen.

use crate::types::{PlayerId, Segments};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Segment shades to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RenderUpdate {
    /// Shades of the three arcs.
    segments: Segments,
}

impl RenderUpdate {
    /// Wraps the current segments.
    pub fn new(segments: Segments) -> Self {
        Self { segments }
    }

    /// Returns "is colour A" flags in segment order.
    pub fn as_flags(&self) -> [bool; 3] {
        self.segments.as_flags()
    }
}

/// Whole minutes and seconds left on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TimeLeft {
    /// Whole minutes.
    minutes: u64,
    /// Seconds past the minute (0-59).
    seconds: u64,
}

impl TimeLeft {
    /// Truncates a duration to whole seconds and splits it.
    pub fn from_duration(remaining: Duration) -> Self {
        let total = remaining.as_secs();
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }

    /// No time left.
    pub fn zero() -> Self {
        Self {
            minutes: 0,
            seconds: 0,
        }
    }
}

/// Snapshot of everything the status line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Time left in the game.
    remaining: TimeLeft,
    /// Player whose turn it is.
    player: PlayerId,
    /// Clicks left in the active turn.
    clicks_left: u8,
    /// Lowest-numbered player holding the top score.
    leader: PlayerId,
    /// The top score.
    leading_score: u32,
}

impl StatusUpdate {
    /// Assembles a status snapshot.
    pub(crate) fn new(
        remaining: TimeLeft,
        player: PlayerId,
        clicks_left: u8,
        leader: PlayerId,
        leading_score: u32,
    ) -> Self {
        Self {
            remaining,
            player,
            clicks_left,
            leader,
            leading_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_left_truncates() {
        let left = TimeLeft::from_duration(Duration::from_millis(29_999));
        assert_eq!((*left.minutes(), *left.seconds()), (0, 29));
    }

    #[test]
    fn test_time_left_splits_minutes() {
        let left = TimeLeft::from_duration(Duration::from_secs(125));
        assert_eq!((*left.minutes(), *left.seconds()), (2, 5));
    }
}
