//! Strictly Circle - terminal host for the three-segment circle game.
//!
//! The game logic lives in [`strictly_segments`]; this crate supplies
//! everything around it:
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Prompt**: the player count question asked before play
//! - **Surface**: circle geometry for drawing and mouse hit testing
//! - **TUI**: ratatui rendering and the single-threaded tick loop
//! - **Simulate**: headless games on a virtual clock

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod prompt;
mod simulate;
pub mod surface;
pub mod tui;

pub use config::{CircleConfig, ConfigError};
pub use prompt::prompt_player_count;
pub use simulate::{Simulation, SimulationReport};
