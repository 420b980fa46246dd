//! First-class invariants for the circle game.
//!
//! Invariants are logical properties that must hold between any two events
//! the core processes. They are checked in debug builds after every click
//! and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

pub mod active_player;
pub mod click_budget;
pub mod scoreboard_size;

pub use active_player::ActivePlayerInvariant;
pub use click_budget::ClickBudgetInvariant;
pub use scoreboard_size::ScoreboardSizeInvariant;

/// All circle game invariants as a composable set.
pub type SegmentInvariants = (
    ClickBudgetInvariant,
    ActivePlayerInvariant,
    ScoreboardSizeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClicksRequired, GameCore, PlayerCount, Scoreboard, ScriptedDice};
    use std::time::Instant;

    fn game(players: i64) -> GameCore<ScriptedDice> {
        let dice = ScriptedDice::new(vec![ClicksRequired::Two, ClicksRequired::One]);
        GameCore::initialize(players, dice, Instant::now()).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(SegmentInvariants::check_all(&game(3)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_clicks() {
        let mut game = game(2);
        let now = Instant::now();
        for angle in [10.0, 130.0, 250.0, 10.0, 10.0] {
            game.handle_click(angle, now);
            assert!(SegmentInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut game = game(2);
        // Seat a third player behind the core's back
        game.scoreboard = Scoreboard::new(PlayerCount::new(3).unwrap());

        let violations = SegmentInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            <ScoreboardSizeInvariant as Invariant<GameCore<ScriptedDice>>>::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (ClickBudgetInvariant, ActivePlayerInvariant);
        assert!(TwoInvariants::check_all(&game(1)).is_ok());
    }
}
