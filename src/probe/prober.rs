//! Per-target probe loops.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::task::TaskTracker;

use super::Pinger;
use crate::state::{Monitor, ProbeResult};
use crate::target::Target;

/// Periodically probes one target and writes the outcome into its slot.
pub struct Prober {
    index: usize,
    target: Target,
    monitor: Monitor,
    pinger: Arc<dyn Pinger>,
    interval: Duration,
    timeout: Duration,
}

impl Prober {
    /// Create a prober for slot `index`. The probe timeout defaults to `interval`.
    pub fn new(
        index: usize,
        target: Target,
        monitor: Monitor,
        pinger: Arc<dyn Pinger>,
        interval: Duration,
    ) -> Self {
        Self {
            index,
            target,
            monitor,
            pinger,
            interval,
            timeout: interval,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run until cancelled, or until the target turns out to be unprobeable.
    ///
    /// Cancellation is only observed between cycles; a probe in flight always
    /// completes or times out first.
    pub async fn run(self) {
        let cancel = self.monitor.cancellation_token().clone();
        tracing::debug!(index = self.index, host = %self.target.address, "Prober started");

        loop {
            if cancel.is_cancelled() {
                break;
            }

            let result = match self.pinger.ping(&self.target.address, self.timeout).await {
                Ok(rtt) => {
                    tracing::debug!(
                        host = %self.target.address,
                        rtt_us = rtt.as_micros() as u64,
                        "Probe succeeded"
                    );
                    ProbeResult::success(rtt)
                }
                Err(e) if e.is_fatal() => {
                    tracing::warn!(
                        host = %self.target.address,
                        error = %e,
                        "Cannot probe target, stopping its prober"
                    );
                    return;
                }
                Err(e) => {
                    tracing::warn!(host = %self.target.address, error = %e, "Probe failed");
                    ProbeResult::failed()
                }
            };

            self.monitor.table().record(self.index, result);

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        tracing::debug!(index = self.index, host = %self.target.address, "Prober stopped");
    }
}

/// The set of running probers, one per target.
pub struct ProberPool {
    monitor: Monitor,
    tracker: TaskTracker,
}

impl ProberPool {
    /// Spawn a prober for every target in the monitor's table.
    pub fn spawn(
        monitor: &Monitor,
        pinger: Arc<dyn Pinger>,
        interval: Duration,
        timeout: Duration,
    ) -> Self {
        let tracker = TaskTracker::new();

        for (index, target) in monitor.table().targets().iter().enumerate() {
            let prober = Prober::new(
                index,
                target.clone(),
                monitor.clone(),
                Arc::clone(&pinger),
                interval,
            )
            .with_timeout(timeout);
            tracker.spawn(prober.run());
        }
        tracker.close();

        tracing::info!(count = tracker.len(), ?interval, "Started probers");
        Self {
            monitor: monitor.clone(),
            tracker,
        }
    }

    /// Number of probers that have not finished yet.
    pub fn active(&self) -> usize {
        self.tracker.len()
    }

    /// Broadcast cancellation and wait for every prober to finish.
    ///
    /// There is no deadline: a prober stuck in a probe holds shutdown up for
    /// at most one probe timeout.
    pub async fn shutdown(&self) {
        self.monitor.cancel();
        self.tracker.wait().await;
        tracing::info!("All probers stopped");
    }
}
