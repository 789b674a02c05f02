//! Error types shared across the monitor.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the targets file. Fatal: nothing is probed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read targets file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a failed probe attempt.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The address could not be turned into a probe target. Stops the prober.
    #[error("invalid target address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },
    /// The echo request was sent but failed. Retried on the next cycle.
    #[error("probe failed: {0}")]
    Failed(String),
    /// No reply within the timeout. Retried on the next cycle.
    #[error("probe timed out")]
    TimedOut,
}

impl ProbeError {
    /// Whether the prober that hit this error should stop for good.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProbeError::InvalidAddress { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_address_is_fatal() {
        let invalid = ProbeError::InvalidAddress {
            address: "999.1.1.1".into(),
            reason: "no such host".into(),
        };
        assert!(invalid.is_fatal());
        assert!(!ProbeError::Failed("unreachable".into()).is_fatal());
        assert!(!ProbeError::TimedOut.is_fatal());
    }

    #[test]
    fn load_error_names_the_path() {
        let err = LoadError::Read {
            path: PathBuf::from("/nope/hosts.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/nope/hosts.txt"));
    }
}
