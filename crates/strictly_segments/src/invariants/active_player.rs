//! Active player invariant: the turn belongs to a seated player.

use super::Invariant;
use crate::game::GameCore;

/// Invariant: the active player number lies in 1..=N.
pub struct ActivePlayerInvariant;

impl<D> Invariant<GameCore<D>> for ActivePlayerInvariant {
    fn holds(game: &GameCore<D>) -> bool {
        game.phase.turn().is_none_or(|turn| {
            let number = turn.player().number();
            number >= 1 && number <= game.rules.players().get()
        })
    }

    fn description() -> &'static str {
        "Active player is seated (1..=N)"
    }
}
