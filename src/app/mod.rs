pub mod cli;
pub mod config;
pub mod events;
pub mod keys;
pub mod lyrics;
pub mod runner;
pub mod state;

use crossterm::event::KeyEvent;

use crate::error::{Error, Result};
use crate::lyrics::DocumentFetcher;
use crate::theme::Theme;
use crate::ui::layout::LayoutController;
use config::Config;
use keys::{Action, KeyMap};
use lyrics::{extract_candidates, extract_lyrics, Candidate};
use state::SelectionState;

/// Everything the event loop mutates: the selection state, the layout that
/// mirrors it, and the key bindings for the active mode.
pub struct App {
    theme: Theme,
    is_running: bool,
    state: SelectionState,
    layout: LayoutController,
    keys: KeyMap,
}

impl App {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let state = SelectionState::initialize(candidates);
        let layout = LayoutController::new(&state);
        let keys = KeyMap::for_mode(state.mode());
        Self {
            theme: Theme::default(),
            is_running: true,
            state,
            layout,
            keys,
        }
    }

    /// Run the search and get to the first interactive state.
    ///
    /// Fails with [`Error::EmptyResult`] when nothing matched. A single match
    /// is opened right away, so the app comes back already in the viewer.
    pub async fn start<F: DocumentFetcher>(config: &Config, fetcher: &F) -> Result<Self> {
        let target = config.search_target();
        tracing::info!(artist = %config.artist, song = %config.song, %target, "searching");

        let doc = fetcher.fetch(&target).await?;
        let candidates = extract_candidates(&doc)?;
        tracing::info!(count = candidates.len(), "search finished");

        let mut app = Self::new(candidates);
        if matches!(app.state, SelectionState::Empty) {
            return Err(Error::EmptyResult);
        }
        if matches!(app.state, SelectionState::SingleMatch(_)) {
            app.activate(fetcher).await?;
        }
        Ok(app)
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn layout(&self) -> &LayoutController {
        &self.layout
    }

    pub fn keys(&self) -> KeyMap {
        self.keys
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn request_redraw(&mut self) {
        self.layout.request_redraw();
    }

    pub fn take_redraw(&mut self) -> bool {
        self.layout.take_redraw()
    }

    /// Dispatch and apply one key press.
    pub async fn handle_key<F: DocumentFetcher>(&mut self, key: KeyEvent, fetcher: &F) -> Result<()> {
        self.process_key(key, fetcher, |_| Ok(())).await?;
        Ok(())
    }

    /// Dispatch `key` and apply the bound action.
    ///
    /// `draw` runs between the two when the status bar has something to say
    /// before a slow action. Returns the action that ran, if any.
    pub async fn process_key<F, D>(
        &mut self,
        key: KeyEvent,
        fetcher: &F,
        mut draw: D,
    ) -> Result<Option<Action>>
    where
        F: DocumentFetcher,
        D: FnMut(&Self) -> Result<()>,
    {
        let Some(action) = self.keys.dispatch(key) else {
            return Ok(None);
        };
        if self.prepare(action) {
            draw(self)?;
        }
        self.apply(action, fetcher).await?;
        Ok(Some(action))
    }

    /// Feedback shown before a slow action runs.
    ///
    /// Returns true if the status bar changed and is worth drawing first.
    pub fn prepare(&mut self, action: Action) -> bool {
        if action != Action::Activate {
            return false;
        }
        let Some(candidate) = self.state.chosen() else {
            return false;
        };
        let status = format!("Fetching lyrics for {}...", candidate.title);
        self.layout.set_status(status);
        true
    }

    pub async fn apply<F: DocumentFetcher>(&mut self, action: Action, fetcher: &F) -> Result<()> {
        tracing::debug!(?action, mode = ?self.keys.mode(), "key action");
        match action {
            Action::MoveCursor(delta) => {
                if self.state.move_cursor(delta) {
                    self.sync_layout();
                }
            }
            Action::Scroll { dx, dy } => {
                if self.state.scroll(dx, dy) {
                    self.sync_layout();
                }
            }
            Action::Activate => self.activate(fetcher).await?,
            Action::Quit => self.quit(),
        }
        Ok(())
    }

    /// Open the chosen candidate: fetch its page and switch to the viewer.
    ///
    /// Any failure is returned as-is and ends the session.
    pub async fn activate<F: DocumentFetcher>(&mut self, fetcher: &F) -> Result<()> {
        let Some(candidate) = self.state.chosen().cloned() else {
            return Ok(());
        };
        tracing::info!(title = %candidate.title, link = %candidate.link, "opening lyrics");

        let doc = fetcher.fetch(&candidate.link).await.inspect_err(|e| {
            tracing::warn!(error = %e, "lyrics fetch failed");
        })?;
        let text = extract_lyrics(&doc)?;

        self.state.show_lyrics(text);
        self.sync_layout();
        Ok(())
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.is_running = false;
    }

    // Rebinding keys happens here and only here, in the same step as the
    // region swap.
    fn sync_layout(&mut self) {
        if let Some(mode) = self.layout.sync(&self.state) {
            self.keys = KeyMap::for_mode(mode);
        }
    }
}
