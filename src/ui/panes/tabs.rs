use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the visualizer tabs of a view; `Tab` cycles them
pub fn render_tabs(frame: &mut Frame, area: Rect, title: &str, labels: &[&str], selected: usize) {
    let tabs = Tabs::new(labels.iter().map(|label| label.to_string()))
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.warning)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│")
        .select(selected);
    frame.render_widget(tabs, area);
}
