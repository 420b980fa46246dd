//! Click budget invariant: an active turn never sits on a spent budget.

use super::Invariant;
use crate::game::GameCore;
use crate::phases::Phase;

/// Invariant: while playing, clicks made stay below clicks required.
///
/// A turn that reaches its budget is completed in the same click, so the
/// core never rests with a full turn.
pub struct ClickBudgetInvariant;

impl<D> Invariant<GameCore<D>> for ClickBudgetInvariant {
    fn holds(game: &GameCore<D>) -> bool {
        match &game.phase {
            Phase::Playing(turn) => *turn.made() < turn.required().count(),
            Phase::GameOver(_) => true,
        }
    }

    fn description() -> &'static str {
        "Active turn has clicks left"
    }
}
