//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_segments::{InvalidConfiguration, PlayerCount, Rules};
use tracing::{debug, info, instrument};

/// Host configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CircleConfig {
    /// Number of players; prompted for when absent.
    #[serde(default)]
    players: Option<i64>,

    /// Game length in seconds.
    #[serde(default = "default_duration_secs")]
    duration_secs: u64,

    /// Interval between timer ticks in milliseconds.
    #[serde(default = "default_tick_millis")]
    tick_millis: u64,

    /// Seed for the click budget dice.
    #[serde(default)]
    seed: Option<u64>,

    /// Colour name for light arcs (any ratatui colour name or `#rrggbb`).
    #[serde(default = "default_light_color")]
    light_color: String,

    /// Colour name for dark arcs.
    #[serde(default = "default_dark_color")]
    dark_color: String,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: String,
}

#[instrument]
fn default_duration_secs() -> u64 {
    30
}

#[instrument]
fn default_tick_millis() -> u64 {
    1000
}

#[instrument]
fn default_light_color() -> String {
    "white".to_string()
}

#[instrument]
fn default_dark_color() -> String {
    "black".to_string()
}

#[instrument]
fn default_log_file() -> String {
    "strictly_circle.log".to_string()
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            players: None,
            duration_secs: default_duration_secs(),
            tick_millis: default_tick_millis(),
            seed: None,
            light_color: default_light_color(),
            dark_color: default_dark_color(),
            log_file: default_log_file(),
        }
    }
}

impl CircleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(duration_secs = config.duration_secs, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_millis == 0 {
            return Err(ConfigError::new("tick_millis must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        players: Option<i64>,
        duration_secs: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if players.is_some() {
            self.players = players;
        }
        if let Some(duration_secs) = duration_secs {
            self.duration_secs = duration_secs;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Game length as a duration.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Timer interval as a duration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Builds the core rules for a validated player count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`] for a zero-second game.
    #[instrument(skip(self))]
    pub fn rules(&self, players: PlayerCount) -> Result<Rules, InvalidConfiguration> {
        Rules::new(players, self.duration())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
