//! Text formatting helpers for the latency view.

use std::time::Duration;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Compact duration text: `0s`, `850ns`, `1.5µs`, `12.345ms`, `1m30s`.
///
/// Sub-second values use the largest unit below one thousand; longer values
/// are split into hours, minutes and fractional seconds.
pub fn format_rtt(rtt: Duration) -> String {
    let nanos = rtt.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        return scaled(nanos, NANOS_PER_MICRO, "µs");
    }
    if nanos < NANOS_PER_SEC {
        return scaled(nanos, NANOS_PER_MILLI, "ms");
    }

    let total_secs = rtt.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = scaled(nanos % (60 * NANOS_PER_SEC), NANOS_PER_SEC, "s");

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&seconds);
    out
}

fn scaled(value: u128, unit: u128, suffix: &str) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return format!("{whole}{suffix}");
    }

    let width = unit.ilog10() as usize;
    let digits = format!("{frac:0width$}");
    format!("{whole}.{}{suffix}", digits.trim_end_matches('0'))
}

/// Pad or cut `text` to exactly `width` terminal columns.
///
/// Cut text keeps one trailing blank column so it never touches the next column.
pub fn fit_column(text: &str, width: usize) -> String {
    let limit = if text.width() <= width {
        width
    } else {
        width.saturating_sub(1)
    };

    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }

    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}
