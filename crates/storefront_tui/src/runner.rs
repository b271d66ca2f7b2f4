//! TUI runner - terminal setup and the main loop.
//!
//! The loop owns the app state and the synchronizer. Terminal events arrive
//! from a reader thread, fetch completions from the synchronizer's channel;
//! both are handled on this task only.

use crate::{Action, App, Event, spawn_event_reader};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use storefront_client::CatalogClient;
use storefront_core::ChartConfig;
use storefront_error::{StorefrontResult, TuiError, TuiErrorKind};
use storefront_store::SnapshotStore;
use storefront_sync::CatalogSynchronizer;
use tracing::{debug, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the user quits.
///
/// Loads the catalog first (snapshot or remote). Fetches still in flight on
/// quit are never applied.
#[instrument(skip(sync))]
pub async fn run_tui<C, S>(
    sync: &mut CatalogSynchronizer<C, S>,
    chart: ChartConfig,
) -> StorefrontResult<()>
where
    C: CatalogClient + 'static,
    S: SnapshotStore,
{
    let mut terminal = setup_terminal()?;
    let mut app = App::new(chart);

    let result = event_loop(&mut terminal, sync, &mut app).await;
    let restored = restore_terminal(&mut terminal);

    info!(pending = sync.pending(), "TUI closed");
    result?;
    restored
}

async fn event_loop<C, S>(
    terminal: &mut CrosstermTerminal,
    sync: &mut CatalogSynchronizer<C, S>,
    app: &mut App,
) -> StorefrontResult<()>
where
    C: CatalogClient + 'static,
    S: SnapshotStore,
{
    sync.load(&mut *app).await;
    let mut events = spawn_event_reader(POLL_INTERVAL);

    while !app.should_quit {
        app.pending = sync.pending();
        terminal
            .draw(|f| crate::ui::draw(f, app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        tokio::select! {
            event = events.recv() => match event {
                Some(Ok(Event::Key(key))) => {
                    if let Some(action) = app.handle_key(key) {
                        perform(action, sync, app).await;
                    }
                }
                Some(Ok(Event::Resize)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => {
                    return Err(TuiError::new(TuiErrorKind::EventRead(
                        "event reader stopped".to_string(),
                    ))
                    .into());
                }
            },
            Some(completion) = sync.next_completion(), if sync.pending() > 0 => {
                sync.apply(completion, &mut *app).await;
            }
        }
    }

    Ok(())
}

/// Carry out a key-triggered catalog operation.
///
/// Fetches are only started here; their results arrive later as completions.
#[instrument(skip(sync, app))]
pub async fn perform<C, S>(action: Action, sync: &mut CatalogSynchronizer<C, S>, app: &mut App)
where
    C: CatalogClient + 'static,
    S: SnapshotStore,
{
    match action {
        Action::AddRandom => {
            let ticket = sync.add_random();
            debug!(ticket, "Random product requested");
            app.status_message = "Adding product...".to_string();
        }
        Action::AddStub => {
            sync.add_stub(&mut *app).await;
        }
        Action::Refresh => {
            let ticket = sync.refresh();
            debug!(ticket, "Refresh requested");
            app.status_message = "Refreshing products...".to_string();
        }
        Action::Remove(index) => {
            sync.remove_at(index, &mut *app).await;
        }
    }
    app.pending = sync.pending();
}

fn setup_terminal() -> StorefrontResult<CrosstermTerminal> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> StorefrontResult<()> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;
    Ok(())
}
