//! Contract-based validation for clicks.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} click {Q}. A failed precondition turns the click into a no-op; a
//! failed postcondition is a bug in the core.

use crate::action::{Click, ClickRejection};
use crate::game::GameCore;
use crate::invariants::{InvariantSet, InvariantViolation, SegmentInvariants};
use crate::phases::Phase;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Reason an action is refused.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Contract for click actions.
///
/// Preconditions:
/// - The game is still playing
/// - The active turn has clicks left
///
/// Postconditions:
/// - Scoreboard keeps its size
/// - No score decreases
/// - At most one point is awarded
/// - All [`SegmentInvariants`] hold
pub struct ClickContract;

impl<D> Contract<GameCore<D>, Click> for ClickContract {
    type Rejection = ClickRejection;

    #[instrument(skip(game))]
    fn pre(game: &GameCore<D>, _click: &Click) -> Result<(), ClickRejection> {
        match &game.phase {
            Phase::GameOver(_) => Err(ClickRejection::GameOver),
            Phase::Playing(turn) if turn.is_complete() => Err(ClickRejection::BudgetSpent),
            Phase::Playing(_) => Ok(()),
        }
    }

    fn post(before: &GameCore<D>, after: &GameCore<D>) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = SegmentInvariants::check_all(after).err().unwrap_or_default();

        let old = before.scoreboard.scores();
        let new = after.scoreboard.scores();
        if old.len() != new.len() {
            violations.push(InvariantViolation::new("Scoreboard size changed"));
        } else if old.iter().zip(new).any(|(o, n)| n < o) {
            violations.push(InvariantViolation::new("A score decreased"));
        }
        if after.scoreboard.total() > before.scoreboard.total() + 1 {
            violations.push(InvariantViolation::new("More than one point awarded"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Click postcondition failed");
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::Turn;
    use crate::{ClicksRequired, PlayerCount, Scoreboard, ScriptedDice};
    use std::time::{Duration, Instant};

    fn game() -> (GameCore<ScriptedDice>, Instant) {
        let start = Instant::now();
        let dice = ScriptedDice::new(vec![ClicksRequired::One]);
        (GameCore::initialize(2, dice, start).unwrap(), start)
    }

    #[test]
    fn test_precondition_accepts_open_turn() {
        let (game, _) = game();
        assert!(ClickContract::pre(&game, &Click::new(10.0)).is_ok());
    }

    #[test]
    fn test_precondition_rejects_finished_game() {
        let (mut game, start) = game();
        game.tick(start + Duration::from_secs(31));
        assert_eq!(
            ClickContract::pre(&game, &Click::new(10.0)),
            Err(ClickRejection::GameOver)
        );
    }

    #[test]
    fn test_precondition_rejects_spent_turn() {
        let (mut game, start) = game();
        let mut turn = Turn::begin(crate::PlayerId::FIRST, ClicksRequired::One);
        turn.record_click();
        game.phase = Phase::Playing(turn);

        assert_eq!(
            ClickContract::pre(&game, &Click::new(10.0)),
            Err(ClickRejection::BudgetSpent)
        );
        assert_eq!(game.handle_click(10.0, start).as_flags(), [true, true, true]);
    }

    #[test]
    fn test_postcondition_holds_after_click() {
        let (game, start) = game();
        let mut after = game.clone();
        after.handle_click(10.0, start);
        assert!(ClickContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_lost_points() {
        let (mut before, _) = game();
        let mut bumped = Scoreboard::new(PlayerCount::new(2).unwrap());
        bumped.award(crate::PlayerId::FIRST);
        before.scoreboard = bumped;

        let after = GameCore {
            scoreboard: Scoreboard::new(PlayerCount::new(2).unwrap()),
            ..before.clone()
        };
        let violations = ClickContract::post(&before, &after).unwrap_err();
        assert!(violations.iter().any(|v| v.description == "A score decreased"));
    }
}
