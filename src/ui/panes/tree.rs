//! Binary tree drawing using the precomputed node layout

use super::utils::{pane_block, Bounds};
use crate::structures::Tree;
use crate::trace::{NodeHighlight, TraversalStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Paragraph,
    },
    Frame,
};

const NODE_RADIUS: f64 = 12.0;

pub fn render_tree_pane(frame: &mut Frame, area: Rect, tree: &Tree, step: Option<&TraversalStep>) {
    if tree.is_empty() {
        let paragraph = Paragraph::new("(empty tree)")
            .block(pane_block(" Tree "))
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let bounds = Bounds::around(tree.nodes().iter().map(|n| n.position));

    let canvas = Canvas::default()
        .block(pane_block(" Tree "))
        .marker(Marker::Braille)
        .x_bounds(bounds.x)
        .y_bounds(bounds.y)
        .paint(|ctx| {
            for node in tree.nodes() {
                for child in [node.left, node.right].into_iter().flatten() {
                    let Some(child) = tree.node(child) else {
                        continue;
                    };
                    ctx.draw(&CanvasLine {
                        x1: node.position.x,
                        y1: bounds.flip_y(node.position.y),
                        x2: child.position.x,
                        y2: bounds.flip_y(child.position.y),
                        color: DEFAULT_THEME.edge,
                    });
                }
            }
            ctx.layer();

            for node in tree.nodes() {
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
