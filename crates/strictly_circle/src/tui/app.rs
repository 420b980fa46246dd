//! Application state and status text.

use crate::surface::CircleLayout;
use std::time::Instant;
use strictly_segments::{GameCore, RenderUpdate, StatusUpdate, TurnDice};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App<D> {
    game: GameCore<D>,
    render: RenderUpdate,
    status: StatusUpdate,
    layout: Option<CircleLayout>,
}

impl<D: TurnDice> App<D> {
    /// Wraps a freshly started game.
    pub fn new(game: GameCore<D>, now: Instant) -> Self {
        let render = game.render();
        let status = game.status(now);
        Self {
            game,
            render,
            status,
            layout: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameCore<D> {
        &self.game
    }

    /// Segment shades to draw.
    pub fn render(&self) -> &RenderUpdate {
        &self.render
    }

    /// Last status reported by the core.
    pub fn status(&self) -> &StatusUpdate {
        &self.status
    }

    /// Records where the circle was last drawn.
    pub fn set_layout(&mut self, layout: CircleLayout) {
        self.layout = Some(layout);
    }

    /// Handles a left click on a terminal cell.
    ///
    /// Returns true when the click landed on the circle and reached the core.
    #[instrument(skip(self, now))]
    pub fn click_cell(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let Some(angle) = self.layout.and_then(|layout| layout.angle_at(column, row)) else {
            debug!("Click outside the circle");
            return false;
        };
        self.render = self.game.handle_click(angle, now);
        // Clicks refresh the status like the timer does
        self.tick(now);
        true
    }

    /// Timer signal from the event loop.
    pub fn tick(&mut self, now: Instant) {
        let was_over = self.game.is_game_over();
        self.status = self.game.tick(now);
        if !was_over && self.game.is_game_over() {
            info!(scores = ?self.game.final_scores(), "Game finished");
        }
    }

    /// Returns true once the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Status panel text.
    pub fn status_lines(&self) -> [String; 3] {
        format_status(&self.status)
    }

    /// Final message, once the game has ended.
    pub fn game_over_text(&self) -> Option<String> {
        self.game.final_scores().map(format_final_scores)
    }
}

/// Formats a status snapshot as three display lines.
pub fn format_status(status: &StatusUpdate) -> [String; 3] {
    [
        format!(
            "Time: {:02}:{:02}",
            status.remaining().minutes(),
            status.remaining().seconds()
        ),
        format!(
            "{}'s turn. Clicks left: {}",
            status.player(),
            status.clicks_left()
        ),
        format!(
            "Top Player: {} with {} points",
            status.leader(),
            status.leading_score()
        ),
    ]
}

/// Formats the end-of-game scoreboard.
pub fn format_final_scores(scores: &[u32]) -> String {
    let lines: Vec<String> = scores
        .iter()
        .enumerate()
        .map(|(index, score)| format!("Player {}: {}", index + 1, score))
        .collect();
    format!("Game over!\nScores:\n{}", lines.join("\n"))
}
