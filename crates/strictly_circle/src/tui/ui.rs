//! Stateless UI rendering for the circle.

use std::str::FromStr;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Circle, Line, Points},
    },
};
use strictly_segments::{Shade, TurnDice};

use super::app::App;
use crate::config::{CircleConfig, ConfigError};
use crate::surface::{CircleLayout, RADIUS, arc_for_draw_angle};

/// Sample spacing for filling arcs, in canvas units.
const FILL_STEP: f64 = 0.02;

/// Colours for the two shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    light: Color,
    dark: Color,
}

impl Palette {
    /// Parses the configured colour names.
    pub fn from_config(config: &CircleConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            light: parse_color(config.light_color())?,
            dark: parse_color(config.dark_color())?,
        })
    }

    /// Colour for a shade.
    pub fn color(&self, shade: Shade) -> Color {
        match shade {
            Shade::Light => self.light,
            Shade::Dark => self.dark,
        }
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::new(format!("Unknown colour: {}", name)))
}

/// Renders the circle, status panel and (once over) the final scores.
pub fn draw<D: TurnDice>(frame: &mut Frame, app: &mut App<D>, palette: Palette) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(6),    // Circle
            Constraint::Length(5), // Status
        ])
        .split(area);

    let title = Paragraph::new("Circle Game")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let layout = CircleLayout::fit(chunks[1]);
    app.set_layout(layout);
    draw_circle(frame, layout.area(), app.render().segments().shades(), palette);

    let status = Paragraph::new(app.status_lines().join("\n"))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if let Some(text) = app.game_over_text() {
        draw_game_over(frame, area, &text);
    }
}

fn draw_circle(frame: &mut Frame, area: Rect, shades: &[Shade; 3], palette: Palette) {
    let mut fills: [Vec<(f64, f64)>; 3] = Default::default();

    let steps = (2.0 * RADIUS / FILL_STEP) as i32;
    for i in 0..=steps {
        for j in 0..=steps {
            let x = -RADIUS + f64::from(i) * FILL_STEP;
            let y = -RADIUS + f64::from(j) * FILL_STEP;
            if x * x + y * y > RADIUS * RADIUS {
                continue;
            }
            let segment = arc_for_draw_angle(y.atan2(x).to_degrees());
            fills[segment.index()].push((x, y));
        }
    }

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(move |ctx| {
            for (index, coords) in fills.iter().enumerate() {
                ctx.draw(&Points {
                    coords,
                    color: palette.color(shades[index]),
                });
            }
            // Outline and arc boundaries
            ctx.layer();
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RADIUS,
                color: Color::Gray,
            });
            for boundary in [0.0_f64, 120.0, 240.0] {
                let (sin, cos) = boundary.to_radians().sin_cos();
                ctx.draw(&Line::new(0.0, 0.0, RADIUS * cos, RADIUS * sin, Color::Gray));
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_game_over(frame: &mut Frame, area: Rect, text: &str) {
    let height = text.lines().count() as u16 + 4;
    let popup = center_rect(area, 30, height);
    let message = format!("{}\n\nPress any key to quit", text);

    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(Block::default().title("Game Over").borders(Borders::ALL));
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
