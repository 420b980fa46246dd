//! Core domain types for the circle game.

use crate::action::InvalidConfiguration;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Shade of a single arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Shade {
    /// Colour A (drawn white by default).
    Light,
    /// Colour B (drawn black by default).
    Dark,
}

impl Shade {
    /// Returns the opposite shade.
    pub fn flipped(self) -> Self {
        match self {
            Shade::Light => Shade::Dark,
            Shade::Dark => Shade::Light,
        }
    }

    /// Returns true for colour A.
    pub fn is_light(self) -> bool {
        matches!(self, Shade::Light)
    }
}

/// One of the three arcs of the circle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Segment {
    /// Segment 0
    First,
    /// Segment 1
    Second,
    /// Segment 2
    Third,
}

impl Segment {
    /// Converts to a slot index (0-2).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The three arcs and their shades, indexed by [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segments {
    shades: [Shade; 3],
}

impl Segments {
    /// All arcs light, as at game start and after a scoring turn.
    pub fn new() -> Self {
        Self {
            shades: [Shade::Light; 3],
        }
    }

    /// Builds segments from explicit shades.
    pub fn from_shades(shades: [Shade; 3]) -> Self {
        Self { shades }
    }

    /// Gets the shade of a segment.
    pub fn get(&self, segment: Segment) -> Shade {
        self.shades[segment.index()]
    }

    /// Flips the shade of a segment.
    pub fn toggle(&mut self, segment: Segment) {
        let slot = &mut self.shades[segment.index()];
        *slot = slot.flipped();
    }

    /// Returns true when every arc is dark.
    pub fn all_dark(&self) -> bool {
        self.shades.iter().all(|s| *s == Shade::Dark)
    }

    /// Returns all shades in index order.
    pub fn shades(&self) -> &[Shade; 3] {
        &self.shades
    }

    /// Returns the shades as "is colour A" flags.
    pub fn as_flags(&self) -> [bool; 3] {
        self.shades.map(Shade::is_light)
    }
}

impl Default for Segments {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated number of players (always at least one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct PlayerCount(usize);

impl PlayerCount {
    /// Validates a requested player count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`] for zero or negative counts.
    #[instrument]
    pub fn new(requested: i64) -> Result<Self, InvalidConfiguration> {
        if requested < 1 {
            return Err(InvalidConfiguration::new(format!(
                "player count must be a positive integer, got {}",
                requested
            )));
        }
        usize::try_from(requested).map(Self).map_err(|_| {
            InvalidConfiguration::new(format!("player count {} is too large", requested))
        })
    }

    /// Returns the count.
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for PlayerCount {
    type Error = InvalidConfiguration;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        Self::new(requested)
    }
}

/// A 1-based player number.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "usize")]
#[display("Player {}", _0)]
pub struct PlayerId(usize);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Builds a player number from a scoreboard index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the player's 1-based number.
    pub fn number(self) -> usize {
        self.0
    }

    /// Returns the player's 0-based scoreboard index.
    pub fn index(self) -> usize {
        self.0 - 1
    }

    /// Returns the next player in seating order, wrapping after the last.
    pub fn next(self, count: PlayerCount) -> Self {
        Self((self.0 % count.get()) + 1)
    }
}

impl TryFrom<usize> for PlayerId {
    type Error = InvalidConfiguration;

    fn try_from(number: usize) -> Result<Self, Self::Error> {
        if number == 0 {
            return Err(InvalidConfiguration::new("player numbers start at 1".to_string()));
        }
        Ok(Self(number))
    }
}

/// Per-player scores in player order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    scores: Vec<u32>,
}

impl Scoreboard {
    /// Creates an all-zero scoreboard.
    pub fn new(count: PlayerCount) -> Self {
        Self {
            scores: vec![0; count.get()],
        }
    }

    /// Adds one point to a player.
    pub(crate) fn award(&mut self, player: PlayerId) {
        if let Some(score) = self.scores.get_mut(player.index()) {
            *score += 1;
        }
    }

    /// Gets a player's score.
    pub fn score(&self, player: PlayerId) -> Option<u32> {
        self.scores.get(player.index()).copied()
    }

    /// Returns all scores in player order.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Sum of all scores.
    pub fn total(&self) -> u32 {
        self.scores.iter().sum()
    }

    /// Number of players on the board.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Never true for a board built from a [`PlayerCount`].
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Number of clicks a turn requires.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ClicksRequired {
    /// One click
    One,
    /// Two clicks
    Two,
    /// Three clicks
    Three,
}

impl ClicksRequired {
    /// Returns the budget as a count.
    pub fn count(self) -> u8 {
        match self {
            ClicksRequired::One => 1,
            ClicksRequired::Two => 2,
            ClicksRequired::Three => 3,
        }
    }

    /// Converts from a count in 1..=3.
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(ClicksRequired::One),
            2 => Some(ClicksRequired::Two),
            3 => Some(ClicksRequired::Three),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_segments_all_light() {
        let segments = Segments::new();
        assert_eq!(segments.as_flags(), [true, true, true]);
        assert!(!segments.all_dark());
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        for segment in Segment::iter() {
            let mut segments = Segments::new();
            segments.toggle(segment);
            assert_eq!(segments.get(segment), Shade::Dark);
            segments.toggle(segment);
            assert_eq!(segments, Segments::new());
        }
    }

    #[test]
    fn test_all_dark() {
        let segments = Segments::from_shades([Shade::Dark; 3]);
        assert!(segments.all_dark());
        assert_eq!(segments.as_flags(), [false, false, false]);
    }

    #[test]
    fn test_player_count_rejects_non_positive() {
        assert!(PlayerCount::new(0).is_err());
        assert!(PlayerCount::new(-3).is_err());
        assert_eq!(PlayerCount::new(4).map(PlayerCount::get), Ok(4));
    }

    #[test]
    fn test_player_rotation_wraps() {
        let count = PlayerCount::new(3).unwrap();
        let p2 = PlayerId::FIRST.next(count);
        let p3 = p2.next(count);
        assert_eq!(p2.number(), 2);
        assert_eq!(p3.number(), 3);
        assert_eq!(p3.next(count), PlayerId::FIRST);
    }

    #[test]
    fn test_single_player_rotates_to_self() {
        let count = PlayerCount::new(1).unwrap();
        assert_eq!(PlayerId::FIRST.next(count), PlayerId::FIRST);
    }

    #[test]
    fn test_scoreboard_award() {
        let mut board = Scoreboard::new(PlayerCount::new(2).unwrap());
        board.award(PlayerId::from_index(1));
        assert_eq!(board.scores(), &[0, 1]);
        assert_eq!(board.total(), 1);
    }

    #[test]
    fn test_player_count_deserialize_validates() {
        assert_eq!(
            serde_json::from_str::<PlayerCount>("3").map(PlayerCount::get).ok(),
            Some(3)
        );
        assert!(serde_json::from_str::<PlayerCount>("0").is_err());
        assert!(serde_json::from_str::<PlayerCount>("-2").is_err());
    }

    #[test]
    fn test_player_id_deserialize_rejects_zero() {
        assert_eq!(serde_json::from_str::<PlayerId>("2").ok(), Some(PlayerId::from_index(1)));
        assert!(serde_json::from_str::<PlayerId>("0").is_err());
    }

    #[test]
    fn test_clicks_required_counts() {
        let counts: Vec<u8> = ClicksRequired::iter().map(ClicksRequired::count).collect();
        assert_eq!(counts, vec![1, 2, 3]);
        assert_eq!(ClicksRequired::from_count(0), None);
        assert_eq!(ClicksRequired::from_count(4), None);
    }
}
