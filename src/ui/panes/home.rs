//! Home view: the four topic sections

use crate::ui::route::Route;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the home view with one card per section; `selected` is highlighted
pub fn render_home_pane(frame: &mut Frame, area: Rect, selected: usize) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            Route::Home.title(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            Route::Home.description(),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(header, layout[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(layout[1]);

    for (index, (route, card)) in Route::SECTIONS.iter().zip(cards.iter()).enumerate() {
        let is_selected = index == selected;
        let border_style = if is_selected {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };

        let block = Block::default()
            .title(format!(" {} ", index + 1))
            .borders(Borders::ALL)
            .border_style(border_style)
            .padding(Padding::new(1, 1, 1, 0));

        let text = vec![
            Line::from(Span::styled(
                route.title(),
                Style::default()
                    .fg(if is_selected {
                        DEFAULT_THEME.warning
                    } else {
                        DEFAULT_THEME.fg
                    })
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                route.description(),
                Style::default().fg(DEFAULT_THEME.comment),
            )),
            Line::from(""),
            Line::from(Span::styled(
                route.path(),
                Style::default().fg(DEFAULT_THEME.primary),
            )),
        ];

        let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *card);
    }
}

/// Render the view shown for an unknown path
pub fn render_not_found_pane(frame: &mut Frame, area: Rect, path: &str) {
    let block = Block::default()
        .title(" 404 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.error))
        .padding(Padding::new(0, 0, 2, 0));

    let text = vec![
        Line::from(Span::styled(
            "Page not found",
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("No view at ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(path.to_string(), Style::default().fg(DEFAULT_THEME.warning)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to return home",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        area,
    );
}
