//! Graph canvas rendering for the traversal visualizers

use crate::graph::{Graph, NodeId, TraversalAlgorithm, TraversalOutcome};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

// Node coordinates are laid out in this box, y growing downwards
const X_BOUNDS: [f64; 2] = [0.0, 350.0];
const Y_BOUNDS: [f64; 2] = [0.0, 400.0];
const NODE_RADIUS: f64 = 14.0;

pub struct GraphRenderData<'a> {
    pub algorithm: TraversalAlgorithm,
    pub graph: &'a Graph,
    pub frontier: &'a [NodeId],
    pub order: &'a [NodeId],
    pub outcome: Option<&'a TraversalOutcome>,
    pub is_running: bool,
}

/// Render the graph canvas and the traversal panel beside it
pub fn render_graph_pane(frame: &mut Frame, area: Rect, data: &GraphRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(area);

    render_canvas(frame, layout[0], data);
    render_traversal_panel(frame, layout[1], data);
}

fn flip(y: f64) -> f64 {
    Y_BOUNDS[1] - y
}

fn render_canvas(frame: &mut Frame, area: Rect, data: &GraphRenderData) {
    let graph = data.graph;
    let algorithm = data.algorithm;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(" {} ", data.algorithm))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .marker(Marker::Braille)
        .x_bounds(X_BOUNDS)
        .y_bounds(Y_BOUNDS)
        .paint(move |ctx| {
            let nodes = graph.nodes();
            for (a, b, weight) in graph.edges() {
                let (from, to) = (&nodes[a], &nodes[b]);
                let on_path = from.flags.on_path && to.flags.on_path;
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: flip(from.y),
                    x2: to.x,
                    y2: flip(to.y),
                    color: if on_path {
                        DEFAULT_THEME.primary
                    } else {
                        DEFAULT_THEME.border_normal
                    },
                });
                if graph.is_weighted() {
                    ctx.print(
                        (from.x + to.x) / 2.0,
                        flip((from.y + to.y) / 2.0),
                        Span::styled(
                            weight.to_string(),
                            Style::default().fg(DEFAULT_THEME.secondary),
                        ),
                    );
                }
            }

            ctx.layer();
            for node in nodes {
                ctx.draw(&Circle {
                    x: node.x,
                    y: flip(node.y),
                    radius: NODE_RADIUS,
                    color: DEFAULT_THEME.node_color(&node.flags, algorithm),
                });
            }

            ctx.layer();
            for node in nodes {
                ctx.print(
                    node.x,
                    flip(node.y),
                    Span::styled(
                        node.label.clone(),
                        Style::default()
                            .fg(DEFAULT_THEME.node_color(&node.flags, algorithm))
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn render_traversal_panel(frame: &mut Frame, area: Rect, data: &GraphRenderData) {
    let block = Block::default()
        .title(" Traversal ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let graph = data.graph;
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(Span::styled(data.algorithm.description(), value_style)),
        Line::from(vec![
            Span::styled("Complexity: ", label_style),
            Span::styled(data.algorithm.complexity(), value_style),
        ]),
        Line::from(""),
    ];

    match data.algorithm {
        TraversalAlgorithm::Bfs | TraversalAlgorithm::Dfs => {
            let frontier_name = if data.algorithm == TraversalAlgorithm::Bfs {
                "Queue: "
            } else {
                "Stack: "
            };
            lines.push(Line::from(vec![
                Span::styled(frontier_name, label_style),
                Span::styled(bracketed(graph, data.frontier), value_style),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Visited: ", label_style),
                Span::styled(graph.describe(data.order), value_style),
            ]));
        }
        TraversalAlgorithm::Dijkstra => {
            lines.push(Line::from(Span::styled("Distances", label_style)));
            for node in graph.nodes() {
                let distance = node
                    .flags
                    .distance
                    .map_or_else(|| "∞".to_string(), |d| d.to_string());
                let via = node
                    .flags
                    .predecessor
                    .map(|p| format!(" via {}", graph.label(p)))
                    .unwrap_or_default();
                let style = if node.flags.visited {
                    Style::default().fg(DEFAULT_THEME.success)
                } else {
                    value_style
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {} ", node.label), label_style),
                    Span::styled(format!("{distance}{via}"), style),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    match data.outcome {
        Some(TraversalOutcome::Order(order)) => lines.push(Line::from(vec![
            Span::styled("Order: ", label_style),
            Span::styled(
                graph.describe(order),
                Style::default().fg(DEFAULT_THEME.success),
            ),
        ])),
        Some(TraversalOutcome::Path { path, distance }) => lines.push(Line::from(vec![
            Span::styled("Path: ", label_style),
            Span::styled(
                format!("{} ({distance})", graph.describe(path)),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
        ])),
        Some(TraversalOutcome::NoPath) => lines.push(Line::from(Span::styled(
            "No path",
            Style::default().fg(DEFAULT_THEME.error),
        ))),
        None if data.is_running => lines.push(Line::from(Span::styled(
            "Running…",
            Style::default().fg(DEFAULT_THEME.secondary),
        ))),
        None => {
            let prompt = if data.algorithm.needs_target() {
                "Type start,end (0-5) and press Enter"
            } else {
                "Type a start node (0-5) and press Enter"
            };
            lines.push(Line::from(Span::styled(prompt, label_style)));
        }
    }

    lines.push(Line::from(""));
    for (name, color) in [
        ("current", DEFAULT_THEME.warning),
        ("visited", DEFAULT_THEME.success),
        ("queued / on path", DEFAULT_THEME.primary),
        ("stacked", DEFAULT_THEME.error),
        ("unvisited", DEFAULT_THEME.comment),
    ] {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(name, label_style),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn bracketed(graph: &Graph, ids: &[NodeId]) -> String {
    let labels: Vec<&str> = ids.iter().map(|&id| graph.label(id)).collect();
    format!("[{}]", labels.join(", "))
}
