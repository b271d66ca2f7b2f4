//! Terminal event forwarding.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use storefront_error::{TuiError, TuiErrorKind};
use tokio::sync::mpsc;

/// Event types for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal was resized
    Resize,
}

/// Read terminal events on a dedicated thread and forward them to the UI task.
///
/// The thread polls with `poll_interval` so it notices a closed receiver
/// and exits. A read error is forwarded once and ends the thread.
pub fn spawn_event_reader(
    poll_interval: Duration,
) -> mpsc::UnboundedReceiver<Result<Event, TuiError>> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        while !tx.is_closed() {
            let ready = match event::poll(poll_interval) {
                Ok(ready) => ready,
                Err(e) => {
                    let _ = tx.send(Err(TuiError::new(TuiErrorKind::EventRead(e.to_string()))));
                    break;
                }
            };
            if !ready {
                continue;
            }

            let forwarded = match event::read() {
                Ok(CrosstermEvent::Key(key)) => Ok(Event::Key(key)),
                Ok(CrosstermEvent::Resize(_, _)) => Ok(Event::Resize),
                Ok(_) => continue,
                Err(e) => Err(TuiError::new(TuiErrorKind::EventRead(e.to_string()))),
            };
            let failed = forwarded.is_err();
            if tx.send(forwarded).is_err() || failed {
                break;
            }
        }
        tracing::debug!("Terminal event reader stopped");
    });

    rx
}
