//! First-class click actions and the error surface of the game core.
//!
//! A click is a domain event: the player's intent to flip the arc under the
//! pointer. It can be checked against the contract before it is applied.

use crate::rules::{normalize_angle, segment_for_angle};
use crate::types::Segment;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A pointer click on the circle, as a polar angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Click {
    angle: f64,
}

impl Click {
    /// Creates a click, normalizing the angle into [0, 360).
    #[instrument]
    pub fn new(angle_degrees: f64) -> Self {
        Self {
            angle: normalize_angle(angle_degrees),
        }
    }

    /// Returns the normalized angle.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Returns the arc this click toggles.
    pub fn segment(&self) -> Segment {
        segment_for_angle(self.angle)
    }
}

impl std::fmt::Display for Click {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}° -> {}", self.angle, self.segment())
    }
}

/// Why a click was ignored.
///
/// Ignored clicks are not errors: the host keeps running and the segments do
/// not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ClickRejection {
    /// The game is over.
    #[display("Game is already over")]
    GameOver,

    /// The active turn has used its whole click budget.
    ///
    /// `GameCore::handle_click` closes a turn on its last click, so a game
    /// driven through it never rests here. The contract still rejects such a
    /// state when it is checked directly.
    #[display("Turn has no clicks left")]
    BudgetSpent,
}

/// The game was configured with values it cannot play with.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid configuration: {} at {}:{}", message, file, line)]
pub struct InvalidConfiguration {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidConfiguration {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
