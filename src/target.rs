//! Probe targets and the targets file.
//!
//! The file holds one target per line as `address[, display name]`. Blank
//! lines are skipped and both fields are trimmed. Targets are returned sorted
//! by address; a target's position in that order is its identity for the rest
//! of the run.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// Field separator within a line.
pub const FIELD_DELIMITER: char = ',';

/// A host to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host name or IP address, as written in the file.
    pub address: String,
    /// Optional label, empty when absent.
    pub display_name: String,
}

impl Target {
    pub fn new(address: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: display_name.into(),
        }
    }

    /// Address followed by the display name in parentheses, if there is one.
    pub fn label(&self) -> String {
        if self.display_name.is_empty() {
            self.address.clone()
        } else {
            format!("{} ({})", self.address, self.display_name)
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Read and parse the targets file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Target>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let targets = parse(&content);
    tracing::info!(path = %path.display(), count = targets.len(), "Loaded targets");
    Ok(targets)
}

/// Parse targets from file content, sorted ascending by address.
///
/// Repeated addresses are kept; the sort is stable so they stay in file order.
pub fn parse(content: &str) -> Vec<Target> {
    let mut targets: Vec<Target> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();

    targets.sort_by(|a, b| a.address.cmp(&b.address));
    targets
}

fn parse_line(line: &str) -> Target {
    let mut fields = line.split(FIELD_DELIMITER);
    let address = fields.next().unwrap_or_default().trim();
    let display_name = fields.next().unwrap_or_default().trim();
    Target::new(address, display_name)
}
