use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One-line status bar: message on the left, active key hints on the right.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let mut spans = Vec::new();
    for (keys, label) in app.keys().hints() {
        spans.push(Span::styled(
            format!(" {} ", keys),
            Style::default()
                .fg(theme.overlay)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{} ", label), Style::default().fg(theme.overlay)));
    }
    let hints = Line::from(spans);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(hints.width() as u16),
        ])
        .split(area);

    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.layout().status()),
        Style::default().fg(theme.green),
    )));
    f.render_widget(status, chunks[0]);
    f.render_widget(Paragraph::new(hints), chunks[1]);
}
