use crate::app::state::SelectionState;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Bordered, scrollable lyrics panel.
pub fn render(f: &mut Frame, area: Rect, app: &App, title: &str) {
    let SelectionState::Viewing(view) = app.state() else {
        return;
    };
    let theme = app.theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.magenta)
                .add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(theme.magenta));

    let scroll = view.scroll();
    let text = Paragraph::new(view.text())
        .style(Style::default().fg(theme.text))
        .block(block)
        .scroll((scroll.y, scroll.x));

    f.render_widget(text, area);
}
