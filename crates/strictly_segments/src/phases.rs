//! Game phases.
//!
//! `Playing` always carries the active turn; `GameOver` always carries the
//! final scores. Neither is an `Option` on the other.

use crate::status::StatusUpdate;
use crate::types::{ClicksRequired, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The active turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Turn {
    /// Player taking the turn.
    player: PlayerId,
    /// Click budget for this turn.
    required: ClicksRequired,
    /// Clicks already made this turn.
    made: u8,
}

impl Turn {
    /// Starts a fresh turn.
    pub(crate) fn begin(player: PlayerId, required: ClicksRequired) -> Self {
        Self {
            player,
            required,
            made: 0,
        }
    }

    /// Clicks left before the turn completes.
    pub fn clicks_left(&self) -> u8 {
        self.required.count().saturating_sub(self.made)
    }

    /// Returns true once the budget is used.
    pub fn is_complete(&self) -> bool {
        self.made >= self.required.count()
    }

    pub(crate) fn record_click(&mut self) {
        self.made += 1;
    }
}

/// Scores frozen at the end of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FinalScores {
    /// Scores in player order.
    scores: Vec<u32>,
    /// Status shown when the game ended.
    last_status: StatusUpdate,
}

impl FinalScores {
    pub(crate) fn new(scores: Vec<u32>, last_status: StatusUpdate) -> Self {
        Self {
            scores,
            last_status,
        }
    }
}

/// Phase of the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting clicks for the active turn.
    Playing(Turn),
    /// Terminal: no further clicks, ticks or turns.
    GameOver(FinalScores),
}

impl Phase {
    /// Returns the active turn while playing.
    pub fn turn(&self) -> Option<&Turn> {
        match self {
            Phase::Playing(turn) => Some(turn),
            Phase::GameOver(_) => None,
        }
    }

    /// Returns true in the terminal phase.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_counts_down() {
        let mut turn = Turn::begin(PlayerId::FIRST, ClicksRequired::Two);
        assert_eq!(turn.clicks_left(), 2);
        turn.record_click();
        assert_eq!(turn.clicks_left(), 1);
        assert!(!turn.is_complete());
        turn.record_click();
        assert!(turn.is_complete());
        assert_eq!(turn.clicks_left(), 0);
    }
}
