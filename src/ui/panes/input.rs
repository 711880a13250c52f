//! Single-line input field

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input line with a block cursor after the text
pub fn render_input_line(frame: &mut Frame, area: Rect, label: &str, text: &str, hint: &str) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let mut spans = vec![
        Span::styled("› ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            "█",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ];
    if text.is_empty() {
        spans.push(Span::styled(
            format!(" {hint}"),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
