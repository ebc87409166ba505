use crate::app::state::SelectionState;
use crate::app::App;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let (candidates, cursor) = match app.state() {
        SelectionState::MultiMatch(list) => (list.candidates(), list.cursor()),
        SelectionState::SingleMatch(c) => (std::slice::from_ref(c), 0),
        _ => return,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(Span::styled(
            format!(" {} results ", candidates.len()),
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(theme.blue));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    let title_w = (inner.width as usize).saturating_sub(4);

    // Keep the cursor row in view, centred where possible.
    let start_idx = cursor
        .saturating_sub(height / 2)
        .min(candidates.len().saturating_sub(height));

    let lines: Vec<Line> = candidates
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(height)
        .map(|(idx, candidate)| {
            let is_sel = idx == cursor;
            let (marker, m_color, t_style) = if is_sel {
                (
                    "●",
                    theme.yellow,
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )
            } else {
                ("○", theme.surface, Style::default().fg(theme.text))
            };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(m_color)),
                Span::styled(truncate(&candidate.title, title_w), t_style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
