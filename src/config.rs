//! Command line and runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Live ICMP latency board for a list of hosts.
#[derive(Debug, Clone, Parser)]
#[command(name = "pingboard", version, about)]
pub struct Cli {
    /// Time between probes of each host, e.g. `1s` or `500ms`
    #[arg(value_parser = parse_interval)]
    pub interval: Duration,

    /// File with one `address[, name]` entry per line
    pub targets: PathBuf,

    /// Redraw period (defaults to the probe interval)
    #[arg(long, value_parser = parse_interval)]
    pub refresh: Option<Duration>,

    /// Probe timeout (defaults to the probe interval)
    #[arg(long, value_parser = parse_interval)]
    pub timeout: Option<Duration>,

    /// Write logs to this file; they are discarded otherwise
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Runtime settings resolved from the arguments.
    pub fn app_config(&self) -> AppConfig {
        let mut config = AppConfig::new(self.interval);
        if let Some(refresh) = self.refresh {
            config = config.with_refresh(refresh);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config
    }
}

/// Parse a human readable, strictly positive duration.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let duration = humantime::parse_duration(s).map_err(|e| e.to_string())?;
    if duration.is_zero() {
        return Err("duration must be greater than zero".to_string());
    }
    Ok(duration)
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Sleep between the probes of one target
    pub interval: Duration,
    /// Upper bound on a single probe
    pub timeout: Duration,
    /// Render tick period
    pub refresh: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl AppConfig {
    /// Timeout and refresh both default to `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            timeout: interval,
            refresh: interval,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_refresh(mut self, refresh: Duration) -> Self {
        self.refresh = refresh;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1s", Duration::from_secs(1))]
    #[case("500ms", Duration::from_millis(500))]
    #[case("1m 30s", Duration::from_secs(90))]
    fn parses_intervals(#[case] input: &str, #[case] expected: Duration) {
        assert_eq!(parse_interval(input), Ok(expected));
    }

    #[rstest]
    #[case("0s")]
    #[case("fast")]
    #[case("")]
    fn rejects_bad_intervals(#[case] input: &str) {
        assert!(parse_interval(input).is_err());
    }

    #[test]
    fn positional_arguments_only() {
        let cli = Cli::try_parse_from(["pingboard", "2s", "hosts.txt"]).unwrap();
        assert_eq!(cli.targets, PathBuf::from("hosts.txt"));
        assert_eq!(cli.app_config(), AppConfig::new(Duration::from_secs(2)));
    }

    #[test]
    fn overrides_refresh_and_timeout() {
        let cli = Cli::try_parse_from([
            "pingboard",
            "2s",
            "hosts.txt",
            "--refresh",
            "250ms",
            "--timeout",
            "1s",
            "--log-file",
            "/tmp/pingboard.log",
        ])
        .unwrap();

        let config = cli.app_config();
        assert_eq!(config.interval, Duration::from_secs(2));
        assert_eq!(config.refresh, Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/pingboard.log")));
    }

    #[rstest]
    #[case(&["pingboard"])]
    #[case(&["pingboard", "1s"])]
    fn missing_arguments_are_usage_errors(#[case] args: &[&str]) {
        let err = Cli::try_parse_from(args.iter().copied()).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn default_config_is_one_second() {
        assert_eq!(AppConfig::default(), AppConfig::new(Duration::from_secs(1)));
    }
}
