//! ICMP echo probe.

use std::fmt;
use std::io;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use surge_ping::{Client, Config, PingIdentifier, PingSequence, SurgeError, ICMP};
use tokio::time::timeout;

use super::Pinger;
use crate::error::ProbeError;

/// Turns a target address into an IP address.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, host: &str) -> io::Result<IpAddr>;
}

/// Parses IP literals and falls back to the system resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl Resolver for SystemResolver {
    async fn resolve(&self, host: &str) -> io::Result<IpAddr> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(ip);
        }

        let addrs = tokio::net::lookup_host(format!("{host}:0")).await?;
        addrs
            .into_iter()
            .next()
            .map(|addr| addr.ip())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no addresses found"))
    }
}

/// Sends a single ICMP echo request per probe.
///
/// Needs permission to open ICMP sockets (root, `CAP_NET_RAW`, or
/// `net.ipv4.ping_group_range` on Linux). Without it every probe fails.
#[derive(Clone)]
pub struct IcmpPinger {
    resolver: Arc<dyn Resolver>,
}

impl IcmpPinger {
    pub fn new() -> Self {
        Self {
            resolver: Arc::new(SystemResolver),
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = resolver;
        self
    }
}

impl Default for IcmpPinger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IcmpPinger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IcmpPinger").finish_non_exhaustive()
    }
}

#[async_trait]
impl Pinger for IcmpPinger {
    /// Resolution and the echo share one deadline; running out of time in
    /// either is a timeout, never a fatal error.
    async fn ping(&self, address: &str, probe_timeout: Duration) -> Result<Duration, ProbeError> {
        let attempt = async {
            let ip = self
                .resolver
                .resolve(address)
                .await
                .map_err(|e| ProbeError::InvalidAddress {
                    address: address.to_string(),
                    reason: e.to_string(),
                })?;

            let config = match ip {
                IpAddr::V4(_) => Config::default(),
                IpAddr::V6(_) => Config::builder().kind(ICMP::V6).build(),
            };
            let client = Client::new(&config)
                .map_err(|e| ProbeError::Failed(format!("failed to open ICMP socket: {e}")))?;

            let mut pinger = client.pinger(ip, PingIdentifier(rand::random())).await;
            pinger.timeout(probe_timeout);

            match pinger.ping(PingSequence(0), &[]).await {
                Ok((_, rtt)) => Ok(rtt),
                Err(SurgeError::Timeout { .. }) => Err(ProbeError::TimedOut),
                Err(e) => Err(ProbeError::Failed(e.to_string())),
            }
        };

        timeout(probe_timeout, attempt)
            .await
            .unwrap_or(Err(ProbeError::TimedOut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    /// Answers after `delay`, or fails if `answer` is `None`.
    struct FixedResolver {
        delay: Duration,
        answer: Option<IpAddr>,
    }

    #[async_trait]
    impl Resolver for FixedResolver {
        async fn resolve(&self, host: &str) -> io::Result<IpAddr> {
            tokio::time::sleep(self.delay).await;
            self.answer.ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("{host}: no such host"))
            })
        }
    }

    #[tokio::test]
    async fn resolves_ipv4_literal() {
        let ip = SystemResolver.resolve("127.0.0.1").await.unwrap();
        assert_eq!(ip, IpAddr::V4(std::net::Ipv4Addr::LOCALHOST));
    }

    #[tokio::test]
    async fn resolves_ipv6_literal() {
        let ip = SystemResolver.resolve("::1").await.unwrap();
        assert_eq!(ip, IpAddr::V6(std::net::Ipv6Addr::LOCALHOST));
    }

    #[tokio::test]
    async fn malformed_address_is_fatal() {
        let err = IcmpPinger::new()
            .ping("300.1.2.3.4..", Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(err.is_fatal(), "unexpected error: {err}");
    }

    #[tokio::test(start_paused = true)]
    async fn slow_resolution_is_bounded_by_the_timeout() {
        let pinger = IcmpPinger::new().with_resolver(Arc::new(FixedResolver {
            delay: Duration::from_secs(30),
            answer: Some(IpAddr::V4(std::net::Ipv4Addr::LOCALHOST)),
        }));

        let start = Instant::now();
        let err = pinger
            .ping("slow.example.com", Duration::from_millis(100))
            .await
            .unwrap_err();

        assert!(matches!(err, ProbeError::TimedOut), "unexpected error: {err}");
        assert!(!err.is_fatal());
        assert_eq!(start.elapsed(), Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn resolution_failure_within_deadline_is_fatal() {
        let pinger = IcmpPinger::new().with_resolver(Arc::new(FixedResolver {
            delay: Duration::from_millis(20),
            answer: None,
        }));

        let err = pinger
            .ping("gone.example.com", Duration::from_millis(100))
            .await
            .unwrap_err();

        assert!(err.is_fatal(), "unexpected error: {err}");
    }
}
