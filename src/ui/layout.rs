use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::state::{Mode, SelectionState};

pub struct MainLayout {
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Status bar always owns the last row.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status
        ])
        .split(area);

    MainLayout {
        body_area: chunks[0],
        footer_area: chunks[1],
    }
}

/// What occupies the body area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRegion {
    Blank,
    ResultList,
    LyricsPanel { title: String },
}

impl ContentRegion {
    fn for_state(state: &SelectionState) -> Self {
        match state {
            SelectionState::Empty => Self::Blank,
            SelectionState::SingleMatch(_) | SelectionState::MultiMatch(_) => Self::ResultList,
            SelectionState::Viewing(view) => Self::LyricsPanel {
                title: format!("{} Lyrics", view.candidate().title),
            },
        }
    }

    fn default_status(&self) -> &'static str {
        match self {
            Self::Blank => "",
            Self::ResultList => "Select a song from the list",
            Self::LyricsPanel { .. } => "Press q to quit",
        }
    }
}

/// Keeps the status bar frame and swaps the body region when the selection
/// state changes variant.
#[derive(Debug)]
pub struct LayoutController {
    content: ContentRegion,
    mode: Mode,
    status: String,
    dirty: bool,
}

impl LayoutController {
    pub fn new(state: &SelectionState) -> Self {
        let content = ContentRegion::for_state(state);
        Self {
            status: content.default_status().to_string(),
            content,
            mode: state.mode(),
            dirty: true,
        }
    }

    /// Bring the layout in line with `state` after a mutation.
    ///
    /// Returns the new mode when the body region was replaced, so the caller
    /// can rebind keys in the same step. Always schedules a redraw.
    pub fn sync(&mut self, state: &SelectionState) -> Option<Mode> {
        self.dirty = true;

        let mode = state.mode();
        if mode == self.mode {
            return None;
        }

        self.content = ContentRegion::for_state(state);
        self.status = self.content.default_status().to_string();
        self.mode = mode;
        tracing::debug!(?mode, content = ?self.content, "swapped content region");
        Some(mode)
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.dirty = true;
    }

    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// True once per pending redraw.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn content(&self) -> &ContentRegion {
        &self.content
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::lyrics::Candidate;
    use url::Url;

    fn list() -> SelectionState {
        let c = |n: &str| {
            Candidate::new(n, Url::parse(&format!("https://e.com/lyrics/{n}.html")).unwrap())
        };
        SelectionState::initialize(vec![c("A"), c("B")])
    }

    #[test]
    fn test_footer_keeps_one_row() {
        let main = get_main_layout(Rect::new(0, 0, 40, 10));
        assert_eq!(main.body_area.height, 9);
        assert_eq!(main.footer_area.height, 1);
        assert_eq!(main.footer_area.y, 9);
    }

    #[test]
    fn test_swap_happens_once_per_transition() {
        let mut state = list();
        let mut layout = LayoutController::new(&state);
        assert_eq!(layout.content(), &ContentRegion::ResultList);
        assert_eq!(layout.status(), "Select a song from the list");
        assert!(layout.take_redraw());
        assert!(!layout.take_redraw());

        state.move_cursor(1);
        assert_eq!(layout.sync(&state), None);
        assert!(layout.take_redraw());

        state.show_lyrics("la la".into());
        assert_eq!(layout.sync(&state), Some(Mode::Viewer));
        assert_eq!(
            layout.content(),
            &ContentRegion::LyricsPanel { title: "B Lyrics".into() }
        );
        assert_eq!(layout.status(), "Press q to quit");

        state.scroll(0, 1);
        assert_eq!(layout.sync(&state), None);
        assert_eq!(layout.mode(), Mode::Viewer);
    }

    #[test]
    fn test_status_change_marks_dirty() {
        let mut layout = LayoutController::new(&list());
        layout.take_redraw();
        layout.set_status("Fetching lyrics for A...");
        assert_eq!(layout.status(), "Fetching lyrics for A...");
        assert!(layout.take_redraw());
    }
}
