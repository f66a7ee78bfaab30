//! Terminal event plumbing.

use std::time::Duration;

use crossterm::event::{self, KeyEvent};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Raw event from crossterm before processing.
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// The event payload delivered to components.
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Spawn the crossterm polling task.
///
/// Polls for terminal events and forwards them through `tx` until the
/// cancellation token fires or the receiver is dropped.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    // Drain whatever crossterm buffered before exiting
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut processed = 0;
                    while processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        processed += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) => RawEvent::Key(key),
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Convert a raw event into the payload components consume.
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn process_key_event() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let kind = process_raw_event(RawEvent::Key(key));
        assert!(matches!(kind, EventKind::Key(k) if k.code == KeyCode::Char('a')));
    }

    #[test]
    fn process_resize_event() {
        let kind = process_raw_event(RawEvent::Resize(80, 24));
        assert!(matches!(kind, EventKind::Resize(80, 24)));
    }
}
