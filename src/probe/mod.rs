//! Probing: the echo primitive and the per-target loops that drive it.
//!
//! - [`Pinger`]: one probe attempt against an address
//! - [`IcmpPinger`]: ICMP echo implementation, resolving through a [`Resolver`]
//! - [`Prober`]: periodic loop for a single target
//! - [`ProberPool`]: spawns one prober per target and drains them on shutdown

mod icmp;
mod prober;

pub use icmp::{IcmpPinger, Resolver, SystemResolver};
pub use prober::{Prober, ProberPool};

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ProbeError;

/// A single reachability measurement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Pinger: Send + Sync {
    /// Send one echo request to `address` and return the round-trip time.
    ///
    /// Must give up after `timeout`, address resolution included.
    async fn ping(&self, address: &str, timeout: Duration) -> Result<Duration, ProbeError>;
}
