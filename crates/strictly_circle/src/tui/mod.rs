//! Terminal host for the circle game.
//!
//! The event loop is the game's timer source: it ticks the core on a fixed
//! interval and after every click, all on one thread.

mod app;
mod ui;

pub use app::{App, format_final_scores, format_status};
pub use ui::Palette;

use crate::config::CircleConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use strictly_segments::{GameCore, PlayerCount, RandomDice, TurnDice};
use tracing::{debug, error, info, instrument, warn};

/// Raw mode, alternate screen and mouse capture. Restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on every early return restores the terminal
        let guard = Self;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs one game in the terminal and returns the final scores.
///
/// Returns `None` when the player quits before time runs out.
#[instrument(skip(config), fields(players = players.get()))]
pub fn run_tui(config: &CircleConfig, players: PlayerCount) -> Result<Option<Vec<u32>>> {
    let palette = Palette::from_config(config).context("Invalid colour in config")?;
    let rules = config.rules(players).context("Invalid game rules")?;
    let dice = match config.seed() {
        Some(seed) => RandomDice::seeded(*seed),
        None => RandomDice::new(),
    };

    info!("Starting Strictly Circle TUI");

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let now = Instant::now();
    let mut app = App::new(GameCore::with_rules(rules, dice, now), now);
    let res = run_game(&mut terminal, &mut app, palette, config);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;

    Ok(app.game().final_scores().map(<[u32]>::to_vec))
}

/// Event loop: draw, wait for input until the next tick, tick.
#[instrument(skip_all)]
fn run_game<D: TurnDice>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<D>,
    palette: Palette,
    config: &CircleConfig,
) -> Result<()> {
    let tick_interval = config.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app, palette))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.is_game_over() {
                        info!("Leaving game over screen");
                        return Ok(());
                    }
                    if matches!(
                        key.code,
                        event::KeyCode::Char('q') | event::KeyCode::Esc
                    ) {
                        info!("User quit");
                        return Ok(());
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let landed = app.click_cell(column, row, Instant::now());
                    debug!(column, row, landed, "Mouse click");
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            app.tick(Instant::now());
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_drop_tolerates_missing_terminal() {
        // Restoring never panics, even when raw mode was never entered
        drop(TerminalGuard);
        drop(TerminalGuard);
    }
}
