//! Event sources and the merged event queue.

use std::io;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::Event;

/// Handle for pushing events into an [`EventHandler`] from another task.
pub type EventSender = mpsc::UnboundedSender<Event>;

/// Merges input, signals and the render tick into one queue.
pub struct EventHandler {
    event_tx: EventSender,
    event_rx: mpsc::UnboundedReceiver<Event>,
    tick: Interval,
}

impl EventHandler {
    /// Create a handler that emits [`Event::Tick`] every `tick_rate`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(tick_rate: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut tick = time::interval(tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            event_tx,
            event_rx,
            tick,
        }
    }

    pub fn sender(&self) -> EventSender {
        self.event_tx.clone()
    }

    /// Forward terminal key and resize events until `cancel` fires.
    pub fn spawn_input(&self, cancel: CancellationToken) -> JoinHandle<()> {
        let tx = self.sender();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                let next = tokio::select! {
                    _ = cancel.cancelled() => break,
                    next = reader.next() => next,
                };

                let event = match next {
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        Event::Key(key)
                    }
                    Some(Ok(CrosstermEvent::Resize(width, height))) => Event::Resize(width, height),
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Failed to read terminal input");
                        break;
                    }
                    None => break,
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        })
    }

    /// Forward SIGINT and SIGTERM as [`Event::Terminate`] until `cancel` fires.
    pub fn spawn_signals(&self, cancel: CancellationToken) -> JoinHandle<()> {
        let tx = self.sender();
        tokio::spawn(async move {
            let signal = tokio::select! {
                _ = cancel.cancelled() => return,
                signal = wait_for_signal() => signal,
            };

            match signal {
                Ok(name) => {
                    tracing::info!(signal = name, "Received termination signal");
                    let _ = tx.send(Event::Terminate(name));
                }
                Err(e) => tracing::error!(error = %e, "Failed to install signal handlers"),
            }
        })
    }

    /// Wait for the next event. Queued events win over a simultaneous tick.
    pub async fn next(&mut self) -> Event {
        tokio::select! {
            biased;
            Some(event) = self.event_rx.recv() => event,
            _ = self.tick.tick() => Event::Tick,
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = interrupt.recv() => Ok("SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
