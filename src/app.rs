//! Application lifecycle.
//!
//! The [`App`] starts one prober per target, then drives the dispatch loop:
//! render ticks repaint the table, and a quit key or termination signal
//! cancels every prober and waits for all of them before returning.

use std::sync::Arc;

use chrono::Local;
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::config::AppConfig;
use crate::event::{is_quit_key, Event, EventHandler};
use crate::probe::{Pinger, ProberPool};
use crate::state::{Lifecycle, Monitor};
use crate::target::Target;
use crate::ui::{StatusInfo, Ui};

/// Main application.
pub struct App {
    /// Application configuration
    config: AppConfig,
    /// Result table and cancellation signal
    monitor: Monitor,
    /// Running probers
    probers: ProberPool,
    /// View renderer
    ui: Ui,
    /// Where in its lifecycle the app is
    lifecycle: Lifecycle,
}

impl App {
    /// Start probing `targets`, which must already be sorted.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: AppConfig, targets: Vec<Target>, pinger: Arc<dyn Pinger>) -> Self {
        let monitor = Monitor::new(targets);
        let probers = ProberPool::spawn(&monitor, pinger, config.interval, config.timeout);

        Self {
            config,
            monitor,
            probers,
            ui: Ui::new(),
            lifecycle: Lifecycle::Running,
        }
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Runs the dispatch loop until shutdown has completed.
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while self.lifecycle == Lifecycle::Running {
            let event = events.next().await;
            self.handle_event(terminal, event).await?;
        }

        Ok(())
    }

    /// Handles one event from the dispatch loop.
    pub async fn handle_event<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        event: Event,
    ) -> Result<()> {
        match event {
            Event::Tick => self.draw(terminal),
            Event::Key(key) => {
                self.handle_key_event(key).await;
                Ok(())
            }
            Event::Resize(width, height) => {
                // Picked up by the next draw.
                tracing::debug!(width, height, "Terminal resized");
                Ok(())
            }
            Event::Terminate(signal) => {
                tracing::info!(signal, "Shutting down on signal");
                self.shutdown().await;
                Ok(())
            }
        }
    }

    /// Paint the current snapshot of the result table.
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let rows = self.monitor.table().snapshot();
        let status = StatusInfo {
            targets: rows.len(),
            interval: self.config.interval,
            refreshed_at: Local::now(),
        };

        terminal.draw(|frame| self.ui.render(frame, &rows, &status))?;
        Ok(())
    }

    async fn handle_key_event(&mut self, key: KeyEvent) {
        if is_quit_key(&key) {
            tracing::info!(key = ?key.code, "Shutting down on quit key");
            self.shutdown().await;
        }
    }

    /// Cancel every prober and wait until all of them have finished.
    pub async fn shutdown(&mut self) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }

        self.lifecycle = Lifecycle::Stopping;
        tracing::info!(
            state = self.lifecycle.as_str(),
            active = self.probers.active(),
            "Stopping probers"
        );

        self.probers.shutdown().await;

        self.lifecycle = Lifecycle::Stopped;
        tracing::info!(state = self.lifecycle.as_str(), "Shutdown complete");
    }
}
