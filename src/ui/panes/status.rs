//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// State badge shown at the right end of the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Playing,
    Running,
    Start,
    End,
}

pub struct StatusRenderData<'a> {
    pub path: &'a str,
    pub message: &'a str,
    /// `(position, total)` of the sorting step on screen
    pub step: Option<(usize, usize)>,
    pub is_error: bool,
    pub badge: Option<Badge>,
    /// `(key, description)` pairs for the current view
    pub hints: &'a [(&'a str, &'a str)],
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (index, (key, description)) in data.hints.iter().enumerate() {
        if index > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {key} "), key_style));
        right_spans.push(Span::styled(format!(" {description} "), desc_style));
    }

    if let Some(badge) = data.badge {
        let (text, color) = match badge {
            Badge::Playing => (" ▶ PLAYING ", DEFAULT_THEME.secondary),
            Badge::Running => (" ● RUNNING ", DEFAULT_THEME.secondary),
            Badge::End => (" END ", DEFAULT_THEME.error),
            Badge::Start => (" START ", DEFAULT_THEME.success),
        };
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Hints get the width they need; the message takes what is left
    let right_line = Line::from(right_spans);
    let right_width = u16::try_from(right_line.width()).unwrap_or(u16::MAX);
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let lead = match data.step {
        Some((position, total)) => format!(" Step {}/{} ", position + 1, total),
        None => format!(" {} ", data.path),
    };

    let left_spans = vec![
        Span::styled(
            lead,
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let right_paragraph = Paragraph::new(right_line)
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
