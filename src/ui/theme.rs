use crate::trace::{BarHighlight, NodeHighlight};
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub title: Color,
    pub status_bg: Color,
    pub edge: Color,
    pub bar_idle: Color,
    pub bar_comparing: Color,
    pub bar_swapping: Color,
    pub bar_sorted: Color,
    pub bar_pivot: Color,
    pub node_unvisited: Color,
    pub node_pending: Color,
    pub node_current: Color,
    pub node_visited: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),
    title: Color::Rgb(249, 226, 175),
    status_bg: Color::Rgb(50, 50, 70),
    edge: Color::Rgb(107, 114, 128),
    bar_idle: Color::Rgb(59, 130, 246),      // Blue
    bar_comparing: Color::Rgb(234, 179, 8),  // Yellow
    bar_swapping: Color::Rgb(239, 68, 68),   // Red
    bar_sorted: Color::Rgb(34, 197, 94),     // Green
    bar_pivot: Color::Rgb(168, 85, 247),     // Purple
    node_unvisited: Color::Rgb(59, 130, 246),
    node_pending: Color::Rgb(139, 92, 246),
    node_current: Color::Rgb(245, 158, 11),
    node_visited: Color::Rgb(16, 185, 129),
};

impl Theme {
    pub fn bar_color(&self, highlight: BarHighlight) -> Color {
        match highlight {
            BarHighlight::Sorted => self.bar_sorted,
            BarHighlight::Swapping => self.bar_swapping,
            BarHighlight::Comparing => self.bar_comparing,
            BarHighlight::Pivot => self.bar_pivot,
            BarHighlight::Idle => self.bar_idle,
        }
    }

    pub fn node_color(&self, highlight: NodeHighlight) -> Color {
        match highlight {
            NodeHighlight::Current => self.node_current,
            NodeHighlight::Visited => self.node_visited,
            NodeHighlight::Pending => self.node_pending,
            NodeHighlight::Unvisited => self.node_unvisited,
        }
    }
}
