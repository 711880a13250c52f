//! Compare view: catalog, growth table and head-to-head results

use crate::compare::{Algorithm, Comparison, GrowthRow, Measurement};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, Wrap},
    Frame,
};

pub struct CompareRenderData<'a> {
    pub first: Algorithm,
    pub second: Algorithm,
    pub size: usize,
    pub result: Option<&'a Comparison>,
    pub growth: &'a [GrowthRow],
    /// Counted operations of every sort, per input size
    pub sort_growth: &'a [(usize, Vec<Measurement>)],
}

pub fn render_compare_pane(frame: &mut Frame, area: Rect, data: &CompareRenderData) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(0)])
        .split(columns[1]);

    render_catalog(frame, left[0], data);
    render_growth(frame, left[1], data);
    render_comparison(frame, right[0], data);
    render_measured_growth(frame, right[1], data);
}

fn header_style() -> Style {
    Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD)
}

fn table_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
}

fn render_catalog(frame: &mut Frame, area: Rect, data: &CompareRenderData) {
    let rows: Vec<Row> = Algorithm::catalog()
        .into_iter()
        .map(|algorithm| {
            let selected = algorithm == data.first || algorithm == data.second;
            let style = if selected {
                Style::default().fg(DEFAULT_THEME.warning)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Row::new(vec![
                Cell::from(algorithm.label()),
                Cell::from(algorithm.complexity()),
                Cell::from(algorithm.description()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Length(26),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(vec!["Algorithm", "Complexity", "Description"]).style(header_style()))
    .block(table_block("Catalog"));
    frame.render_widget(table, area);
}

fn render_growth(frame: &mut Frame, area: Rect, data: &CompareRenderData) {
    let rows: Vec<Row> = data
        .growth
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.n.to_string()),
                Cell::from(row.n_log_n.to_string()),
                Cell::from(row.n_squared.to_string()),
            ])
            .style(Style::default().fg(DEFAULT_THEME.fg))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Min(12),
        ],
    )
    .header(Row::new(vec!["n", "n log₂ n", "n²"]).style(header_style()))
    .block(table_block("Growth"));
    frame.render_widget(table, area);
}

fn render_comparison(frame: &mut Frame, area: Rect, data: &CompareRenderData) {
    let block = table_block("Head to head").padding(Padding::new(1, 1, 0, 0));
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("a: ", label_style),
            Span::styled(data.first.label(), value_style.add_modifier(Modifier::BOLD)),
            Span::styled("   b: ", label_style),
            Span::styled(data.second.label(), value_style.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("size (z): ", label_style),
            Span::styled(data.size.to_string(), value_style),
        ]),
        Line::from(""),
    ];

    match data.result {
        Some(result) => {
            for measurement in [&result.first, &result.second] {
                let counts = &measurement.counts;
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<10}", measurement.algorithm.label()),
                        value_style,
                    ),
                    Span::styled(
                        format!("{} ops", measurement.operations()),
                        Style::default().fg(DEFAULT_THEME.secondary),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {} steps, {} comparisons, {} swaps, {} writes",
                        counts.steps, counts.comparisons, counts.swaps, counts.writes
                    ),
                    label_style,
                )));
            }
            lines.push(Line::from(""));
            let verdict = match result.winner() {
                Some(winner) => Span::styled(
                    format!("Winner: {winner}"),
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled("Tie", Style::default().fg(DEFAULT_THEME.warning)),
            };
            lines.push(Line::from(vec![
                verdict,
                Span::styled(
                    format!("  (n = {}, seed {})", result.size, result.seed),
                    label_style,
                ),
            ]));
        }
        None => lines.push(Line::from(Span::styled(
            "Press Enter to compare",
            label_style,
        ))),
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_measured_growth(frame: &mut Frame, area: Rect, data: &CompareRenderData) {
    let labels: Vec<&str> = data
        .sort_growth
        .first()
        .map(|(_, row)| row.iter().map(|m| m.algorithm.label()).collect())
        .unwrap_or_default();

    let mut header = vec!["n".to_string()];
    header.extend(labels.iter().map(|label| format!("{label} ops")));

    let rows: Vec<Row> = data
        .sort_growth
        .iter()
        .map(|(size, row)| {
            let mut cells = vec![Cell::from(size.to_string())];
            cells.extend(row.iter().map(|m| Cell::from(m.operations().to_string())));
            Row::new(cells).style(Style::default().fg(DEFAULT_THEME.fg))
        })
        .collect();

    let mut widths = vec![Constraint::Length(8)];
    widths.extend(labels.iter().map(|_| Constraint::Min(12)));

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(header_style()))
        .block(table_block("Measured on random input"));
    frame.render_widget(table, area);
}
