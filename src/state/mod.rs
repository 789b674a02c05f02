//! Shared monitoring state.
//!
//! Probers, the renderer and the lifecycle controller all hold a clone of the
//! same [`Monitor`] handle rather than reaching for globals.

mod table;

pub use table::{ProbeResult, ResultTable, Row};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::target::Target;

/// Lifecycle of the whole monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Probers, rendering and input are all active.
    Running,
    /// Cancellation has been broadcast; waiting for probers to finish.
    Stopping,
    /// Every prober has finished.
    Stopped,
}

impl Lifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Running => "running",
            Lifecycle::Stopping => "stopping",
            Lifecycle::Stopped => "stopped",
        }
    }
}

/// Handle to the result table and the cancellation signal.
#[derive(Debug, Clone)]
pub struct Monitor {
    table: Arc<ResultTable>,
    cancel: CancellationToken,
}

impl Monitor {
    /// Create the shared state for `targets`, which must already be sorted.
    pub fn new(targets: Vec<Target>) -> Self {
        Self {
            table: Arc::new(ResultTable::new(targets)),
            cancel: CancellationToken::new(),
        }
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Ask every prober to stop after its current cycle.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn clones_share_table_and_token() {
        let monitor = Monitor::new(vec![Target::new("10.0.0.1", "")]);
        let clone = monitor.clone();

        clone
            .table()
            .record(0, ProbeResult::success(Duration::from_millis(3)));
        assert_eq!(
            monitor.table().get(0),
            Some(ProbeResult::success(Duration::from_millis(3)))
        );

        assert!(!monitor.is_cancelled());
        clone.cancel();
        assert!(monitor.is_cancelled());
    }
}
