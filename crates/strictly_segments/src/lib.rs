//! Strictly Segments - the game core of the circle clicking party game.
//!
//! A circle is split into three 120° arcs. Players take turns clicking arcs
//! to flip them between a light and a dark shade. Each turn grants a random
//! budget of one to three clicks; a player who ends their turn with every arc
//! dark scores a point and the circle resets. The game runs against a clock.
//!
//! # Architecture
//!
//! - **Types**: shades, segments, players and the scoreboard
//! - **Rules**: angle to segment mapping and the leading player
//! - **Dice**: the source of per-turn click budgets
//! - **Game**: [`GameCore`], the owned state machine driven by clicks and ticks
//! - **Contracts / Invariants**: pre- and postconditions checked around clicks
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use strictly_segments::{ClicksRequired, GameCore, ScriptedDice};
//!
//! let start = Instant::now();
//! let dice = ScriptedDice::new(vec![ClicksRequired::One]);
//! let mut game = GameCore::initialize(2, dice, start).expect("two players");
//!
//! let render = game.handle_click(10.0, start);
//! assert_eq!(render.as_flags(), [true, true, false]);
//! assert_eq!(game.status(start).player().number(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod dice;
mod game;
mod invariants;
mod phases;
mod rules;
mod status;
mod types;

// Crate-level exports - Errors and click rejections
pub use action::{Click, ClickRejection, InvalidConfiguration};

// Crate-level exports - Contracts
pub use contracts::{ClickContract, Contract};

// Crate-level exports - Dice
pub use dice::{RandomDice, ScriptedDice, TurnDice};

// Crate-level exports - Game core
pub use game::{DEFAULT_GAME_DURATION, GameClock, GameCore, Rules};

// Crate-level exports - Invariants
pub use invariants::{
    ActivePlayerInvariant, ClickBudgetInvariant, Invariant, InvariantSet, InvariantViolation,
    ScoreboardSizeInvariant, SegmentInvariants,
};

// Crate-level exports - Phases
pub use phases::{FinalScores, Phase, Turn};

// Crate-level exports - Rules
pub use rules::{leader, normalize_angle, segment_for_angle};

// Crate-level exports - Status
pub use status::{RenderUpdate, StatusUpdate, TimeLeft};

// Crate-level exports - Domain types
pub use types::{ClicksRequired, PlayerCount, PlayerId, Scoreboard, Segment, Segments, Shade};
