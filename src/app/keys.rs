use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveCursor(isize),
    Activate,
    Scroll { dx: i32, dy: i32 },
    Quit,
}

type Binding = (&'static str, Action);

const LIST_BINDINGS: &[Binding] = &[
    ("Up", Action::MoveCursor(-1)),
    ("k", Action::MoveCursor(-1)),
    ("Down", Action::MoveCursor(1)),
    ("j", Action::MoveCursor(1)),
    ("Enter", Action::Activate),
    ("Esc", Action::Quit),
    ("q", Action::Quit),
    ("Ctrl+C", Action::Quit),
];

const VIEWER_BINDINGS: &[Binding] = &[
    ("Up", Action::Scroll { dx: 0, dy: -1 }),
    ("k", Action::Scroll { dx: 0, dy: -1 }),
    ("Down", Action::Scroll { dx: 0, dy: 1 }),
    ("j", Action::Scroll { dx: 0, dy: 1 }),
    ("Ctrl+U", Action::Scroll { dx: 0, dy: -10 }),
    ("PageUp", Action::Scroll { dx: 0, dy: -10 }),
    ("Ctrl+D", Action::Scroll { dx: 0, dy: 10 }),
    ("PageDown", Action::Scroll { dx: 0, dy: 10 }),
    ("Esc", Action::Quit),
    ("q", Action::Quit),
    ("Ctrl+C", Action::Quit),
];

/// Key bindings for one mode. Swapped as a whole when the mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    mode: Mode,
    bindings: &'static [Binding],
}

impl KeyMap {
    pub fn for_mode(mode: Mode) -> Self {
        let bindings = match mode {
            Mode::List => LIST_BINDINGS,
            Mode::Viewer => VIEWER_BINDINGS,
        };
        Self { mode, bindings }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Action bound to a key press. Releases and repeats are ignored.
    pub fn dispatch(&self, event: KeyEvent) -> Option<Action> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        self.bindings
            .iter()
            .find(|(key, _)| matches(event, key))
            .map(|&(_, action)| action)
    }

    /// Short hints for the footer, e.g. `↑/k ↓/j move`.
    pub fn hints(&self) -> Vec<(String, &'static str)> {
        let keys = |action: Action, limit: usize| {
            self.bindings
                .iter()
                .filter(|(_, a)| *a == action)
                .take(limit)
                .map(|(k, _)| display(k))
                .collect::<Vec<_>>()
                .join("/")
        };

        match self.mode {
            Mode::List => vec![
                (
                    format!("{} {}", keys(Action::MoveCursor(-1), 2), keys(Action::MoveCursor(1), 2)),
                    "move",
                ),
                (keys(Action::Activate, 1), "open"),
                (keys(Action::Quit, 2), "quit"),
            ],
            Mode::Viewer => vec![
                (
                    format!(
                        "{} {}",
                        keys(Action::Scroll { dx: 0, dy: -1 }, 2),
                        keys(Action::Scroll { dx: 0, dy: 1 }, 2)
                    ),
                    "scroll",
                ),
                (
                    format!(
                        "{} {}",
                        keys(Action::Scroll { dx: 0, dy: -10 }, 1),
                        keys(Action::Scroll { dx: 0, dy: 10 }, 1)
                    ),
                    "page",
                ),
                (keys(Action::Quit, 2), "quit"),
            ],
        }
    }
}

fn matches(event: KeyEvent, key_str: &str) -> bool {
    if let Some(ch) = key_str.strip_prefix("Ctrl+") {
        return event.modifiers.contains(KeyModifiers::CONTROL)
            && ch.chars().next().is_some_and(|c| {
                event.code == KeyCode::Char(c.to_ascii_lowercase())
                    || event.code == KeyCode::Char(c.to_ascii_uppercase())
            });
    }

    match key_str {
        "Enter" => event.code == KeyCode::Enter,
        "Esc" => event.code == KeyCode::Esc,
        "Up" => event.code == KeyCode::Up,
        "Down" => event.code == KeyCode::Down,
        "PageUp" => event.code == KeyCode::PageUp,
        "PageDown" => event.code == KeyCode::PageDown,
        s if s.chars().count() == 1 => {
            // Plain letters must not fire while Ctrl is held (Ctrl+D is not `d`).
            !event.modifiers.contains(KeyModifiers::CONTROL)
                && s.chars().next().is_some_and(|c| event.code == KeyCode::Char(c))
        }
        _ => false,
    }
}

fn display(key_str: &str) -> String {
    match key_str {
        "Up" => "↑".to_string(),
        "Down" => "↓".to_string(),
        "PageUp" => "PgUp".to_string(),
        "PageDown" => "PgDn".to_string(),
        s => match s.strip_prefix("Ctrl+") {
            Some(rest) => format!("^{rest}"),
            None => s.to_string(),
        },
    }
}
