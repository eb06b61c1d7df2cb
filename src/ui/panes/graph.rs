//! Graph drawing: edges, then nodes colored by traversal state

use super::utils::{pane_block, Bounds};
use crate::structures::Graph;
use crate::trace::{NodeHighlight, TraversalStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    Frame,
};

const NODE_RADIUS: f64 = 14.0;

pub fn render_graph_pane(frame: &mut Frame, area: Rect, graph: &Graph, step: Option<&TraversalStep>) {
    let bounds = Bounds::around(graph.nodes().iter().map(|n| n.position));

    let canvas = Canvas::default()
        .block(pane_block(" Graph "))
        .marker(Marker::Braille)
        .x_bounds(bounds.x)
        .y_bounds(bounds.y)
        .paint(|ctx| {
            for edge in graph.edges() {
                let (Some(a), Some(b)) = (graph.node(edge.from), graph.node(edge.to)) else {
                    continue;
                };
                ctx.draw(&CanvasLine {
                    x1: a.position.x,
                    y1: bounds.flip_y(a.position.y),
                    x2: b.position.x,
                    y2: bounds.flip_y(b.position.y),
                    color: DEFAULT_THEME.edge,
                });
            }
            ctx.layer();

            for node in graph.nodes() {
                let highlight = step.map_or(NodeHighlight::Unvisited, |s| s.highlight(node.id));
                let color = DEFAULT_THEME.node_color(highlight);
                let y = bounds.flip_y(node.position.y);
                ctx.draw(&Circle {
                    x: node.position.x,
                    y,
                    radius: NODE_RADIUS,
                    color,
                });
                ctx.print(
                    node.position.x,
                    y,
                    Span::styled(
                        node.value.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .bg(color)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}
