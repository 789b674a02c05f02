//! The result table: one probe result per target, index-aligned with the
//! sorted target list.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::target::Target;

/// Latest outcome of probing one target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeResult {
    /// Round-trip time of the last cycle. Zero means the probe failed or has
    /// not completed yet.
    pub last_rtt: Duration,
    /// Whether the last cycle ended in an error.
    pub has_error: bool,
}

impl ProbeResult {
    pub fn success(rtt: Duration) -> Self {
        Self {
            last_rtt: rtt,
            has_error: false,
        }
    }

    /// The zero-duration sentinel recorded for a failed or timed out probe.
    pub fn failed() -> Self {
        Self {
            last_rtt: Duration::ZERO,
            has_error: true,
        }
    }

    /// Rows with a zero round-trip time are shown in alert styling.
    ///
    /// A genuine zero measurement is indistinguishable from a failure here.
    pub fn is_alert(&self) -> bool {
        self.last_rtt.is_zero()
    }
}

/// A target paired with its result, as seen by one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub target: Target,
    pub result: ProbeResult,
}

/// Shared table of probe results.
///
/// A single lock guards every slot: writes touch one slot, snapshots copy
/// all of them, and the two never interleave.
#[derive(Debug)]
pub struct ResultTable {
    targets: Vec<Target>,
    slots: Mutex<Vec<ProbeResult>>,
}

impl ResultTable {
    /// Create a table with one default slot per target.
    pub fn new(targets: Vec<Target>) -> Self {
        let slots = vec![ProbeResult::default(); targets.len()];
        Self {
            targets,
            slots: Mutex::new(slots),
        }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Replace the result in slot `index`. Out of range indexes are ignored.
    pub fn record(&self, index: usize, result: ProbeResult) {
        let mut slots = self.lock();
        if let Some(slot) = slots.get_mut(index) {
            *slot = result;
        } else {
            tracing::error!(index, len = slots.len(), "Result slot out of range");
        }
    }

    /// Result currently held in slot `index`.
    pub fn get(&self, index: usize) -> Option<ProbeResult> {
        self.lock().get(index).copied()
    }

    /// Copy of every row, taken under one lock acquisition.
    pub fn snapshot(&self) -> Vec<Row> {
        let results = self.lock().clone();
        self.targets
            .iter()
            .cloned()
            .zip(results)
            .map(|(target, result)| Row { target, result })
            .collect()
    }

    // A writer that panicked mid-update can only have left a whole
    // ProbeResult behind, so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<ProbeResult>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
