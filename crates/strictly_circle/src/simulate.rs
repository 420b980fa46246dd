//! Headless games on a virtual clock.

use anyhow::{Result, bail};
use derive_getters::Getters;
use derive_new::new;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::{Duration, Instant};
use strictly_segments::{GameCore, PlayerId, RandomDice, Rules, leader};
use tracing::{debug, info, instrument};

const TICK: Duration = Duration::from_secs(1);

/// Parameters of a simulated game.
#[derive(Debug, Clone, Copy, new)]
pub struct Simulation {
    rules: Rules,
    click_interval: Duration,
    seed: Option<u64>,
}

/// Outcome of a simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SimulationReport {
    /// Clicks that reached the core.
    clicks: u32,
    /// Final scores in player order.
    scores: Vec<u32>,
    /// Lowest-numbered player with the top score.
    leader: PlayerId,
    /// Seed used, if any.
    seed: Option<u64>,
}

impl SimulationReport {
    /// Plain-text scoreboard.
    pub fn to_text(&self) -> String {
        let mut text = crate::tui::format_final_scores(&self.scores);
        text.push_str(&format!("\nTop Player: {} ({} clicks played)", self.leader, self.clicks));
        text
    }
}

impl Simulation {
    /// Plays random clicks every `click_interval` of virtual time, ticking
    /// once per virtual second, until the core reports game over.
    ///
    /// # Errors
    ///
    /// Fails for a zero click interval, which would never advance the clock.
    #[instrument(skip(self), fields(players = self.rules.players().get(), seed = ?self.seed))]
    pub fn run(&self) -> Result<SimulationReport> {
        if self.click_interval.is_zero() {
            bail!("click interval must be longer than zero");
        }

        let (dice, mut rng) = match self.seed {
            Some(seed) => (RandomDice::seeded(seed), StdRng::seed_from_u64(seed.wrapping_add(1))),
            None => (RandomDice::new(), StdRng::from_os_rng()),
        };

        let start = Instant::now();
        let mut game = GameCore::with_rules(self.rules, dice, start);
        let mut elapsed = Duration::ZERO;
        let mut next_tick = TICK;
        let mut clicks = 0;

        while !game.is_game_over() {
            elapsed += self.click_interval;
            while next_tick <= elapsed && !game.is_game_over() {
                game.tick(start + next_tick);
                next_tick += TICK;
            }
            if game.is_game_over() {
                break;
            }

            let angle = rng.random_range(0.0..360.0);
            let render = game.handle_click(angle, start + elapsed);
            clicks += 1;
            debug!(angle, flags = ?render.as_flags(), "Simulated click");
        }

        let (leader, _) = leader(game.scoreboard());
        let scores = game.final_scores().map(<[u32]>::to_vec).unwrap_or_default();
        info!(?scores, clicks, "Simulation finished");

        Ok(SimulationReport {
            clicks,
            scores,
            leader,
            seed: self.seed,
        })
    }
}
