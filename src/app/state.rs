use super::lyrics::Candidate;
use unicode_width::UnicodeWidthStr;

/// Which half of the UI is active. Picks both the content region and the
/// key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    List,
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

/// Result list with a cursor. Never empty, cursor always in range.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateList {
    candidates: Vec<Candidate>,
    cursor: usize,
}

impl CandidateList {
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> &Candidate {
        &self.candidates[self.cursor]
    }
}

/// Lyrics of the chosen candidate plus where the viewer is scrolled to.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricsView {
    candidate: Candidate,
    text: String,
    scroll: ScrollOffset,
    line_count: usize,
    max_width: usize,
}

impl LyricsView {
    fn new(candidate: Candidate, text: String) -> Self {
        let line_count = text.lines().count();
        let max_width = text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        Self {
            candidate,
            text,
            scroll: ScrollOffset::default(),
            line_count,
            max_width,
        }
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.scroll.x = step(self.scroll.x, dx, self.max_width);
        self.scroll.y = step(self.scroll.y, dy, self.line_count);
    }
}

/// Offset moved by `delta`, kept within `0..len` (0 when there is no content).
fn step(current: u16, delta: i32, len: usize) -> u16 {
    let limit = len.saturating_sub(1).min(u16::MAX as usize) as i64;
    (current as i64 + delta as i64).clamp(0, limit) as u16
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionState {
    /// Search returned nothing usable. Terminal.
    Empty,
    /// Exactly one hit, activated without asking.
    SingleMatch(Candidate),
    MultiMatch(CandidateList),
    Viewing(LyricsView),
}

impl SelectionState {
    pub fn initialize(mut candidates: Vec<Candidate>) -> Self {
        match candidates.len() {
            0 => Self::Empty,
            1 => Self::SingleMatch(candidates.remove(0)),
            _ => Self::MultiMatch(CandidateList {
                candidates,
                cursor: 0,
            }),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Viewing(_) => Mode::Viewer,
            _ => Mode::List,
        }
    }

    /// Move the list cursor by `delta`, stopping at either end.
    ///
    /// Returns false when there is no list to move in.
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        let Self::MultiMatch(list) = self else {
            return false;
        };
        let last = list.candidates.len() - 1;
        list.cursor = list.cursor.saturating_add_signed(delta).min(last);
        true
    }

    /// The candidate an activation would open, if any.
    pub fn chosen(&self) -> Option<&Candidate> {
        match self {
            Self::SingleMatch(c) => Some(c),
            Self::MultiMatch(list) => Some(list.selected()),
            _ => None,
        }
    }

    /// Switch to the viewer with the fetched lyrics of the chosen candidate.
    ///
    /// Only a state that can choose a candidate may make this transition.
    pub fn show_lyrics(&mut self, text: String) -> bool {
        let Some(candidate) = self.chosen().cloned() else {
            return false;
        };
        *self = Self::Viewing(LyricsView::new(candidate, text));
        true
    }

    pub fn scroll(&mut self, dx: i32, dy: i32) -> bool {
        let Self::Viewing(view) = self else {
            return false;
        };
        view.scroll_by(dx, dy);
        true
    }
}
