//! The game core: an owned state machine driven by clicks and ticks.

use crate::action::{Click, InvalidConfiguration};
use crate::contracts::{ClickContract, Contract};
use crate::dice::TurnDice;
use crate::phases::{FinalScores, Phase, Turn};
use crate::rules::leader;
use crate::status::{RenderUpdate, StatusUpdate, TimeLeft};
use crate::types::{PlayerCount, PlayerId, Scoreboard, Segments};
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Length of a game unless configured otherwise.
pub const DEFAULT_GAME_DURATION: Duration = Duration::from_secs(30);

/// Fixed parameters of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct Rules {
    /// Number of players.
    players: PlayerCount,
    /// How long the game lasts.
    duration: Duration,
}

impl Rules {
    /// Creates rules for a game.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`] for a zero duration.
    #[instrument]
    pub fn new(players: PlayerCount, duration: Duration) -> Result<Self, InvalidConfiguration> {
        if duration.is_zero() {
            return Err(InvalidConfiguration::new(
                "game duration must be longer than zero".to_string(),
            ));
        }
        Ok(Self { players, duration })
    }

    /// Rules with the default duration.
    pub fn with_default_duration(players: PlayerCount) -> Self {
        Self {
            players,
            duration: DEFAULT_GAME_DURATION,
        }
    }
}

impl<'de> Deserialize<'de> for Rules {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        #[derive(Deserialize)]
        struct Unchecked {
            players: PlayerCount,
            duration: Duration,
        }

        let unchecked = Unchecked::deserialize(deserializer)?;
        Rules::new(unchecked.players, unchecked.duration).map_err(serde::de::Error::custom)
    }
}

/// Start time and length of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct GameClock {
    /// When the game started.
    start: Instant,
    /// How long it lasts.
    duration: Duration,
}

impl GameClock {
    /// Starts the clock.
    pub fn new(start: Instant, duration: Duration) -> Self {
        Self { start, duration }
    }

    /// Time left at `now`, never negative.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.start))
    }

    /// Returns true once no time is left.
    pub fn expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}

/// The circle game.
///
/// Owns the segments, scoreboard, turn and clock. The host feeds it clicks
/// (as angles) and periodic ticks, both from a single thread, and passes the
/// current time with each call.
#[derive(Debug, Clone)]
pub struct GameCore<D> {
    pub(crate) rules: Rules,
    pub(crate) segments: Segments,
    pub(crate) scoreboard: Scoreboard,
    pub(crate) clock: GameClock,
    pub(crate) phase: Phase,
    pub(crate) dice: D,
}

impl<D: TurnDice> GameCore<D> {
    /// Starts a game of the default length.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`] when `player_count` is not positive.
    #[instrument(skip(dice, now))]
    pub fn initialize(
        player_count: i64,
        dice: D,
        now: Instant,
    ) -> Result<Self, InvalidConfiguration> {
        let players = PlayerCount::new(player_count)?;
        Ok(Self::with_rules(Rules::with_default_duration(players), dice, now))
    }

    /// Starts a game with explicit rules, then opens the first turn.
    #[instrument(
        skip(dice, now),
        fields(players = rules.players.get(), duration = ?rules.duration)
    )]
    pub fn with_rules(rules: Rules, mut dice: D, now: Instant) -> Self {
        let first = Turn::begin(PlayerId::FIRST, dice.roll());
        info!(required = first.required().count(), "Game started");
        Self {
            rules,
            segments: Segments::new(),
            scoreboard: Scoreboard::new(rules.players),
            clock: GameClock::new(now, rules.duration),
            phase: Phase::Playing(first),
            dice,
        }
    }

    /// Applies a click at `angle_degrees` around the circle.
    ///
    /// Clicks after the game ends, or beyond the turn's budget, are ignored.
    /// Completing a turn may score, rotate to the next player and end the game.
    #[instrument(skip(self, now))]
    pub fn handle_click(&mut self, angle_degrees: f64, now: Instant) -> RenderUpdate {
        let click = Click::new(angle_degrees);

        if let Err(rejection) = ClickContract::pre(&*self, &click) {
            debug!(%rejection, "Click ignored");
            return self.render();
        }

        #[cfg(debug_assertions)]
        let before = self.snapshot();

        let segment = click.segment();
        self.segments.toggle(segment);
        debug!(%click, shade = %self.segments.get(segment), "Segment toggled");

        let completed = match &mut self.phase {
            Phase::Playing(turn) => {
                turn.record_click();
                turn.is_complete().then_some(*turn.player())
            }
            Phase::GameOver(_) => None,
        };

        if let Some(player) = completed {
            self.complete_turn(player, now);
        }

        #[cfg(debug_assertions)]
        self.check_postcondition(&before);

        self.render()
    }

    /// Periodic timer signal.
    ///
    /// Ends an expired game even when nobody is clicking, then reports status.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) -> StatusUpdate {
        if !self.phase.is_over() && self.clock.expired(now) {
            info!("Time ran out between clicks");
            self.end(now);
        }
        self.status(now)
    }

    /// Current status without advancing the game.
    ///
    /// After the game ends this is the status frozen at the final moment.
    pub fn status(&self, now: Instant) -> StatusUpdate {
        match &self.phase {
            Phase::Playing(turn) => self.live_status(turn, now),
            Phase::GameOver(final_scores) => *final_scores.last_status(),
        }
    }

    /// Current segment shades.
    pub fn render(&self) -> RenderUpdate {
        RenderUpdate::new(self.segments)
    }

    /// Returns true once the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Final scores in player order, once the game has ended.
    pub fn final_scores(&self) -> Option<&[u32]> {
        match &self.phase {
            Phase::GameOver(final_scores) => Some(final_scores.scores().as_slice()),
            Phase::Playing(_) => None,
        }
    }

    /// Returns the rules the game was started with.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the segments.
    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// Returns the live scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the game clock.
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[instrument(skip(self, now), fields(player = player.number()))]
    fn complete_turn(&mut self, player: PlayerId, now: Instant) {
        if self.segments.all_dark() {
            self.scoreboard.award(player);
            self.segments = Segments::new();
            info!(
                score = self.scoreboard.score(player).unwrap_or_default(),
                "All segments dark, point scored"
            );
        }

        let next = player.next(self.rules.players);
        self.start_turn(next, now);
    }

    fn start_turn(&mut self, player: PlayerId, now: Instant) {
        if self.clock.expired(now) {
            self.end(now);
            return;
        }

        let turn = Turn::begin(player, self.dice.roll());
        info!(
            player = player.number(),
            required = turn.required().count(),
            "Turn started"
        );
        self.phase = Phase::Playing(turn);
    }

    fn end(&mut self, now: Instant) {
        let Phase::Playing(turn) = &self.phase else {
            return;
        };
        let live = self.live_status(turn, now);
        let last_status = StatusUpdate::new(
            TimeLeft::zero(),
            *live.player(),
            0,
            *live.leader(),
            *live.leading_score(),
        );

        let scores = self.scoreboard.scores().to_vec();
        info!(?scores, "Game over");
        self.phase = Phase::GameOver(FinalScores::new(scores, last_status));
    }

    fn live_status(&self, turn: &Turn, now: Instant) -> StatusUpdate {
        let (leader, leading_score) = leader(&self.scoreboard);
        StatusUpdate::new(
            TimeLeft::from_duration(self.clock.remaining(now)),
            *turn.player(),
            turn.clicks_left(),
            leader,
            leading_score,
        )
    }

    #[cfg(debug_assertions)]
    fn check_postcondition(&self, before: &GameCore<()>) {
        if let Err(violations) = ClickContract::post(before, &self.snapshot()) {
            tracing::error!(?violations, "Click postcondition violated");
            panic!("Click postcondition violated: {:?}", violations);
        }
    }

    /// State copy used for postcondition checks; the dice are not needed.
    #[cfg(debug_assertions)]
    fn snapshot(&self) -> GameCore<()> {
        GameCore {
            rules: self.rules,
            segments: self.segments,
            scoreboard: self.scoreboard.clone(),
            clock: self.clock,
            phase: self.phase.clone(),
            dice: (),
        }
    }
}
