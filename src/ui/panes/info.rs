//! Algorithm metadata, traversal progress and color legend

use super::utils::pane_block;
use crate::algorithm::{Algorithm, Family};
use crate::structures::{NodeId, Structure};
use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Data needed to render the info pane
pub struct InfoRenderData<'a> {
    pub algorithm: Algorithm,
    pub structure: &'a Structure,
    pub start: Option<NodeId>,
    pub step: Option<&'a Step>,
    pub delay_ms: u128,
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData) {
    let info = data.algorithm.info();
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(Span::styled(
            info.name,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Complexity: ", label),
            Span::styled(info.complexity, Style::default().fg(DEFAULT_THEME.secondary)),
        ]),
        Line::from(Span::styled(info.description, value)),
        Line::from(vec![
            Span::styled("Delay: ", label),
            Span::styled(format!("{} ms", data.delay_ms), value),
        ]),
        Line::default(),
    ];

    if data.algorithm.family() != Family::Sorting {
        let start = match data.start {
            Some(id) => node_label(data.structure, id),
            None if data.algorithm.family() == Family::Tree => "root".to_string(),
            None => "first node".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled("Start: ", label),
            Span::styled(start, value),
        ]));

        if let Some(step) = data.step.and_then(Step::as_traversal) {
            if let Some(work) = &step.work_list {
                let role = if data.algorithm == Algorithm::GraphDfs {
                    "Stack: "
                } else {
                    "Queue: "
                };
                let names: Vec<String> = work.iter().map(|&id| node_label(data.structure, id)).collect();
                lines.push(Line::from(vec![
                    Span::styled(role, label),
                    Span::styled(format!("[{}]", names.join(", ")), value),
                ]));
            }
            let order: Vec<String> = step.order.iter().map(i32::to_string).collect();
            lines.push(Line::from(vec![
                Span::styled("Order: ", label),
                Span::styled(
                    order.join(" → "),
                    Style::default().fg(DEFAULT_THEME.success),
                ),
            ]));
        }
        lines.push(Line::default());
        lines.push(legend(&[
            ("current", DEFAULT_THEME.node_current),
            ("visited", DEFAULT_THEME.node_visited),
            ("pending", DEFAULT_THEME.node_pending),
            ("unvisited", DEFAULT_THEME.node_unvisited),
        ]));
    } else {
        lines.push(legend(&[
            ("compare", DEFAULT_THEME.bar_comparing),
            ("swap", DEFAULT_THEME.bar_swapping),
            ("pivot", DEFAULT_THEME.bar_pivot),
            ("sorted", DEFAULT_THEME.bar_sorted),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(pane_block(" Info "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Node shown by its value, falling back to its id
fn node_label(structure: &Structure, id: NodeId) -> String {
    structure
        .node_value(id)
        .map_or_else(|| id.to_string(), |v| v.to_string())
}

fn legend(entries: &[(&'static str, Color)]) -> Line<'static> {
    let mut spans = Vec::new();
    for &(name, color) in entries {
        spans.push(Span::styled("■ ", Style::default().fg(color)));
        spans.push(Span::styled(
            format!("{}  ", name),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    Line::from(spans)
}
