//! Sources of per-turn click budgets.

use crate::types::ClicksRequired;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Draws how many clicks the next turn requires.
pub trait TurnDice {
    /// Rolls the budget for a new turn.
    fn roll(&mut self) -> ClicksRequired;
}

/// Uniform dice over {1, 2, 3}.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Creates dice seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates reproducible dice.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnDice for RandomDice {
    fn roll(&mut self) -> ClicksRequired {
        match self.rng.random_range(1..=3u8) {
            1 => ClicksRequired::One,
            2 => ClicksRequired::Two,
            _ => ClicksRequired::Three,
        }
    }
}

/// Dice that replay a fixed sequence, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: Vec<ClicksRequired>,
    cursor: usize,
}

impl ScriptedDice {
    /// Creates scripted dice. An empty script always rolls one.
    pub fn new(script: Vec<ClicksRequired>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl TurnDice for ScriptedDice {
    fn roll(&mut self) -> ClicksRequired {
        let Some(&roll) = self.script.get(self.cursor % self.script.len().max(1)) else {
            return ClicksRequired::One;
        };
        self.cursor += 1;
        debug!(?roll, cursor = self.cursor, "Scripted roll");
        roll
    }
}
