//! Bar chart of the array being sorted

use super::utils::pane_block;
use crate::trace::SortStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

/// Render the array pane.
///
/// `step` is the current snapshot; without one the raw `values` are drawn
/// with no highlighting.
pub fn render_array_pane(frame: &mut Frame, area: Rect, values: &[i32], step: Option<&SortStep>) {
    let block = pane_block(" Array ");
    let array = step.map_or(values, |s| s.array.as_slice());

    if array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let (bar_width, bar_gap) = bar_geometry(area.width.saturating_sub(2), array.len());
    let show_labels = bar_width >= 3;

    let bars: Vec<Bar> = array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = step.map_or(DEFAULT_THEME.bar_idle, |s| {
                DEFAULT_THEME.bar_color(s.highlight(index))
            });
            let height = u64::try_from(value).unwrap_or(0);
            Bar::default()
                .value(height)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
                .text_value(if show_labels {
                    value.to_string()
                } else {
                    String::new()
                })
        })
        .collect();

    let max = array.iter().copied().max().unwrap_or(1).max(1);
    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::try_from(max).unwrap_or(1))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Widest bars that fit `count` bars in `width` columns
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    let width = usize::from(width);
    let gap = if width >= count * 2 { 1 } else { 0 };
    let usable = width.saturating_sub(gap * count.saturating_sub(1));
    let bar = (usable / count.max(1)).max(1);
    (u16::try_from(bar).unwrap_or(1), u16::try_from(gap).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry() {
        assert_eq!(bar_geometry(100, 20), (4, 1));
        assert_eq!(bar_geometry(30, 20), (1, 0));
        assert_eq!(bar_geometry(5, 50), (1, 0));
    }
}
