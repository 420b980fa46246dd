//! Circle geometry shared by drawing and mouse handling.
//!
//! Arcs are drawn counter-clockwise from three o'clock with y pointing up.
//! Clicks are measured with y pointing down, so a click on the drawn arc
//! `[0, 120)` arrives at an angle in `(240, 360]` and the core's reversed
//! click mapping lands it back on segment 0.

use ratatui::layout::Rect;
use strictly_segments::Segment;

/// Radius of the drawn disk in canvas units; the canvas spans [-1, 1].
pub const RADIUS: f64 = 0.9;

/// Angle of a pointer offset from the circle's centre, in degrees [0, 360).
///
/// `dy` grows downward, as in screen coordinates.
pub fn click_angle(dx: f64, dy: f64) -> f64 {
    let mut angle = dy.atan2(dx).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Segment drawn at a counter-clockwise angle (y up), in draw order.
pub fn arc_for_draw_angle(angle_degrees: f64) -> Segment {
    let angle = angle_degrees.rem_euclid(360.0);
    if angle < 120.0 {
        Segment::First
    } else if angle < 240.0 {
        Segment::Second
    } else {
        Segment::Third
    }
}

/// Where the circle sits on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleLayout {
    area: Rect,
}

impl CircleLayout {
    /// Fits the largest round-looking square into `outer`.
    ///
    /// Terminal cells are about twice as tall as wide, so the square is two
    /// columns per row.
    pub fn fit(outer: Rect) -> Self {
        let height = outer.height.min(outer.width / 2).max(1);
        let width = (height * 2).min(outer.width.max(1));
        let x = outer.x + (outer.width.saturating_sub(width)) / 2;
        let y = outer.y + (outer.height.saturating_sub(height)) / 2;
        Self {
            area: Rect::new(x, y, width, height),
        }
    }

    /// Cells the canvas occupies.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Offset of a cell's centre from the circle's centre in canvas units.
    ///
    /// The y component grows downward.
    pub fn offset(&self, column: u16, row: u16) -> (f64, f64) {
        let width = f64::from(self.area.width.max(1));
        let height = f64::from(self.area.height.max(1));
        let dx = (f64::from(column) - f64::from(self.area.x) + 0.5) / width * 2.0 - 1.0;
        let dy = (f64::from(row) - f64::from(self.area.y) + 0.5) / height * 2.0 - 1.0;
        (dx, dy)
    }

    /// Click angle for a mouse cell, or `None` outside the disk.
    pub fn angle_at(&self, column: u16, row: u16) -> Option<f64> {
        let (dx, dy) = self.offset(column, row);
        if dx * dx + dy * dy > RADIUS * RADIUS {
            return None;
        }
        Some(click_angle(dx, dy))
    }
}
