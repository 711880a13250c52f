//! Rendering for lists, stacks, queues and the binary search tree
//!
//! Lists and queues are drawn as rows of boxed values joined by arrows, the stack as
//! a column with the top first, and the tree on a canvas using the in-order layout.
//! The node a search is comparing is yellow; the node it found is green.

use crate::ident::Token;
use crate::structures::bst::NodeLayout;
use crate::structures::{Item, StructureKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};
use rustc_hash::FxHashMap;

pub struct StructureRenderData<'a> {
    pub kind: StructureKind,
    pub items: &'a [Item],
    /// Present for the tree only
    pub layout: Option<&'a [NodeLayout]>,
    pub height: usize,
    pub highlight: Option<Token>,
    pub found: Option<Token>,
    pub is_running: bool,
}

impl StructureRenderData<'_> {
    fn color_of(&self, token: Token) -> Color {
        if self.found == Some(token) {
            DEFAULT_THEME.success
        } else if self.highlight == Some(token) {
            DEFAULT_THEME.warning
        } else {
            DEFAULT_THEME.primary
        }
    }

    fn item_span(&self, item: &Item) -> Span<'static> {
        let color = self.color_of(item.token);
        let mut style = Style::default().fg(color);
        if color != DEFAULT_THEME.primary {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Span::styled(format!("[ {} ]", item.value), style)
    }
}

/// Render the structure and its info panel
pub fn render_structure_pane(frame: &mut Frame, area: Rect, data: &StructureRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(area);

    let block = Block::default()
        .title(format!(" {} ", data.kind))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if data.items.is_empty() {
        let paragraph = Paragraph::new(format!("(empty {})", data.kind.noun()))
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, layout[0]);
    } else if let Some(nodes) = data.layout {
        render_tree(frame, layout[0], block, nodes, data);
    } else {
        let lines = match data.kind {
            StructureKind::Stack => stack_lines(data),
            _ => vec![Line::from(row_spans(data))],
        };
        let paragraph = Paragraph::new(lines)
            .block(block.padding(Padding::new(2, 2, 1, 0)))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, layout[0]);
    }

    render_info_panel(frame, layout[1], data);
}

fn row_spans(data: &StructureRenderData) -> Vec<Span<'static>> {
    let arrow = Style::default().fg(DEFAULT_THEME.comment);
    let mut spans = Vec::new();

    let (lead, joint, tail) = match data.kind {
        StructureKind::DoublyLinkedList => ("null ← ", " ⇄ ", " → null"),
        StructureKind::Queue => ("front → ", " ", " ← back"),
        _ => ("head → ", " → ", " → null"),
    };

    spans.push(Span::styled(lead, arrow));
    for (index, item) in data.items.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(joint, arrow));
        }
        spans.push(data.item_span(item));
    }
    spans.push(Span::styled(tail, arrow));
    spans
}

fn stack_lines(data: &StructureRenderData) -> Vec<Line<'static>> {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    data.items
        .iter()
        .rev()
        .enumerate()
        .map(|(index, item)| {
            let mut spans = vec![data.item_span(item)];
            if index == 0 {
                spans.push(Span::styled("  ← top", label));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_tree(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    nodes: &[NodeLayout],
    data: &StructureRenderData,
) {
    let width = nodes.len().max(1) as f64;
    let height = data.height.max(1) as f64;

    let position = |node: &NodeLayout| (node.column as f64 + 0.5, height - node.depth as f64 - 0.5);
    let by_token: FxHashMap<Token, (f64, f64)> = nodes
        .iter()
        .map(|node| (node.item.token, position(node)))
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for node in nodes {
                let Some(parent) = node.parent.and_then(|p| by_token.get(&p)) else {
                    continue;
                };
                let (x, y) = position(node);
                ctx.draw(&CanvasLine {
                    x1: parent.0,
                    y1: parent.1,
                    x2: x,
                    y2: y,
                    color: DEFAULT_THEME.border_normal,
                });
            }

            ctx.layer();
            for node in nodes {
                let (x, y) = position(node);
                let color = data.color_of(node.item.token);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: 0.2,
                    color,
                });
                ctx.print(
                    x,
                    y,
                    Span::styled(
                        node.item.value.to_string(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, data: &StructureRenderData) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(Span::styled(data.kind.description(), value_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Size: ", label_style),
            Span::styled(data.items.len().to_string(), value_style),
        ]),
    ];
    if data.kind == StructureKind::BinarySearchTree {
        lines.push(Line::from(vec![
            Span::styled("Height: ", label_style),
            Span::styled(data.height.to_string(), value_style),
        ]));
    }
    if data.is_running {
        lines.push(Line::from(Span::styled(
            "Searching…",
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
    }

    lines.push(Line::from(""));
    for (name, color) in [
        ("node", DEFAULT_THEME.primary),
        ("comparing", DEFAULT_THEME.warning),
        ("found", DEFAULT_THEME.success),
    ] {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(name, label_style),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
