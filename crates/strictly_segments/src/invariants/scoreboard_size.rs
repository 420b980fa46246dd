//! Scoreboard size invariant: one score per player, for the whole game.

use super::Invariant;
use crate::game::GameCore;

/// Invariant: the scoreboard has exactly N entries.
pub struct ScoreboardSizeInvariant;

impl<D> Invariant<GameCore<D>> for ScoreboardSizeInvariant {
    fn holds(game: &GameCore<D>) -> bool {
        game.scoreboard.len() == game.rules.players().get()
    }

    fn description() -> &'static str {
        "Scoreboard has one entry per player"
    }
}
