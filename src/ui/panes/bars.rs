//! Sorting bar chart rendering
//!
//! One bar per array element, coloured by its display state. Negative values are
//! drawn as empty bars but their real value is printed.

use crate::sorting::{ArrayElement, ElementState, SortAlgorithm, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const MAX_BAR_WIDTH: u16 = 9;
const BAR_GAP: u16 = 1;

pub struct SortRenderData<'a> {
    pub algorithm: SortAlgorithm,
    pub elements: &'a [ArrayElement],
    /// `(position, total, kind)` of the recorded step on screen
    pub step: Option<(usize, usize, StepKind)>,
    pub speed: u64,
    pub is_playing: bool,
}

/// Widest bar that fits `count` bars and their gaps into `inner_width`
fn bar_width(inner_width: u16, count: usize) -> u16 {
    let count = u16::try_from(count).unwrap_or(u16::MAX).max(1);
    let gaps = BAR_GAP.saturating_mul(count - 1);
    (inner_width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
}

/// Render the bar chart and the step panel beside it
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: &SortRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(area);

    render_chart(frame, layout[0], data);
    render_step_panel(frame, layout[1], data);
}

fn render_chart(frame: &mut Frame, area: Rect, data: &SortRenderData) {
    let block = Block::default()
        .title(format!(" {} ", data.algorithm))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if data.elements.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let bar_width = bar_width(area.width.saturating_sub(2), data.elements.len());

    let bars: Vec<Bar> = data
        .elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let color = DEFAULT_THEME.element_color(element.state);
            Bar::default()
                .value(element.value.max(0) as u64)
                .text_value(element.value.to_string())
                .label(Line::from(index.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().bg(color).fg(Color::Black))
        })
        .collect();

    let max = data
        .elements
        .iter()
        .map(|e| e.value.max(0) as u64)
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(max)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn render_step_panel(frame: &mut Frame, area: Rect, data: &SortRenderData) {
    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(Span::styled(
            data.algorithm.description(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(vec![
            Span::styled("Complexity: ", label_style),
            Span::styled(data.algorithm.complexity(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label_style),
            Span::styled(data.speed.to_string(), value_style),
        ]),
        Line::from(""),
    ];

    match data.step {
        Some((position, total, kind)) => {
            lines.push(Line::from(vec![
                Span::styled("Step ", label_style),
                Span::styled(
                    format!("{} / {}", position + 1, total),
                    value_style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    if data.is_playing { "  ▶" } else { "  ❚❚" },
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                step_caption(kind),
                Style::default().fg(DEFAULT_THEME.warning),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "Press s to start",
            Style::default().fg(DEFAULT_THEME.comment),
        ))),
    }

    lines.push(Line::from(""));
    for (state, name) in [
        (ElementState::Normal, "normal"),
        (ElementState::Pivot, "pivot"),
        (ElementState::Comparing, "comparing"),
        (ElementState::Swapping, "swapping / merging"),
        (ElementState::Dividing, "dividing"),
        (ElementState::Sorted, "sorted"),
    ] {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(DEFAULT_THEME.element_color(state))),
            Span::styled(name, label_style),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// One-line explanation of a recorded step
pub fn step_caption(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Pivot => "Pivot selected",
        StepKind::Compare => "Comparing with the pivot",
        StepKind::MarkSwap => "Smaller than the pivot, swapping",
        StepKind::Swap => "Swapped",
        StepKind::Place => "Pivot placed in its final position",
        StepKind::Divide => "Dividing the range",
        StepKind::Merge => "Merging two sorted halves",
        StepKind::Write { compared: true } => "Smaller head written back",
        StepKind::Write { compared: false } => "Remaining element copied",
        StepKind::Merged => "Range merged",
        StepKind::Finish => "Sorted",
    }
}
