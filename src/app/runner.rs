use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;

use super::config::Config;
use super::events::AppEvent;
use super::keys::Action;
use super::App;
use crate::error::Result;
use crate::lyrics::{DocumentFetcher, HttpFetcher};
use crate::tui::Tui;
use crate::ui;

/// Search, then drive the interactive session until the user quits.
///
/// Startup failures (no results, fetch errors) happen before the terminal is
/// touched, so their messages land on a normal screen.
pub async fn run(config: &Config) -> Result<()> {
    let fetcher = HttpFetcher::with_timeout(&config.user_agent, config.timeout);
    let mut app = App::start(config, &fetcher).await?;

    let mut tui = Tui::enter()?;
    let (tx, mut rx) = mpsc::channel(100);

    let input = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event) = reader.next().await {
            let event = match event {
                Ok(event) => AppEvent::Input(event),
                Err(e) => AppEvent::InputError(e),
            };
            if tx.send(event).await.is_err() {
                break;
            }
        }
    });

    let result = event_loop(&mut app, &mut rx, &fetcher, |app: &App| {
        tui.draw(|f| ui::ui(f, app))
    })
    .await;
    input.abort();
    result
}

/// Feed queued events into `app` until it stops running.
///
/// `draw` renders the current app; it runs when the layout is dirty and once
/// more ahead of a lyric fetch so the status bar can say what is loading.
pub async fn event_loop<F, D>(
    app: &mut App,
    rx: &mut mpsc::Receiver<AppEvent>,
    fetcher: &F,
    mut draw: D,
) -> Result<()>
where
    F: DocumentFetcher,
    D: FnMut(&App) -> Result<()>,
{
    while app.is_running() {
        if app.take_redraw() {
            draw(app)?;
        }

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            AppEvent::Input(Event::Key(key)) => {
                let action = app.process_key(key, fetcher, &mut draw).await?;
                if action == Some(Action::Activate) {
                    // Keys typed while the page loaded were meant for the list.
                    while rx.try_recv().is_ok() {}
                }
            }
            AppEvent::Input(Event::Resize(..)) => app.request_redraw(),
            AppEvent::Input(_) => {}
            AppEvent::InputError(e) => return Err(e.into()),
        }
    }
    Ok(())
}
