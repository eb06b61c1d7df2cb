//! Shared helpers for the canvas-based panes

use crate::structures::Point;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Padding around the drawing, in layout units
const MARGIN: f64 = 30.0;

/// Bordered pane block with a styled title
pub fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
}

/// Canvas bounds covering every point plus a margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Bounds {
    pub fn around(points: impl IntoIterator<Item = Point>) -> Self {
        let mut x = [f64::INFINITY, f64::NEG_INFINITY];
        let mut y = [f64::INFINITY, f64::NEG_INFINITY];
        for p in points {
            x = [x[0].min(p.x), x[1].max(p.x)];
            y = [y[0].min(p.y), y[1].max(p.y)];
        }
        if x[0] > x[1] {
            return Bounds {
                x: [0.0, 1.0],
                y: [0.0, 1.0],
            };
        }
        Bounds {
            x: [x[0] - MARGIN, x[1] + MARGIN],
            y: [y[0] - MARGIN, y[1] + MARGIN],
        }
    }

    /// Layout y grows downward; canvas y grows upward
    pub fn flip_y(&self, y: f64) -> f64 {
        self.y[0] + self.y[1] - y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_padding_and_flip() {
        let bounds = Bounds::around([Point::new(100.0, 50.0), Point::new(300.0, 210.0)]);
        assert_eq!(bounds.x, [70.0, 330.0]);
        assert_eq!(bounds.y, [20.0, 240.0]);
        assert_eq!(bounds.flip_y(50.0), 210.0);
    }

    #[test]
    fn test_bounds_of_nothing() {
        let bounds = Bounds::around(Vec::new());
        assert_eq!(bounds.x, [0.0, 1.0]);
    }
}
