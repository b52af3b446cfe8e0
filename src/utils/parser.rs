//! Parsers for configuration values.

use std::time::Duration;

/// Parse a duration string like "30s", "10m", "1h", "1d", "1w".
///
/// Supported units:
/// - s: seconds
/// - m: minutes
/// - h: hours
/// - d: days
/// - w: weeks
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    if input.is_empty() || !input.is_char_boundary(input.len() - 1) {
        return None;
    }

    let (digits, unit) = input.split_at(input.len() - 1);
    let amount: u64 = digits.trim().parse().ok()?;

    let seconds = match unit {
        "s" => amount,
        "m" => amount.checked_mul(60)?,
        "h" => amount.checked_mul(3600)?,
        "d" => amount.checked_mul(86400)?,
        "w" => amount.checked_mul(604800)?,
        _ => return None,
    };

    Some(Duration::from_secs(seconds))
}

/// Parse an expiration setting: a duration, or `none`/`off`/`0` to disable.
///
/// Returns `None` for malformed input, `Some(None)` when disabled.
pub fn parse_expiration(input: &str) -> Option<Option<Duration>> {
    match input.trim().to_lowercase().as_str() {
        "none" | "off" | "never" | "0" => Some(None),
        other => match parse_duration(other)? {
            d if d.is_zero() => Some(None),
            d => Some(Some(d)),
        },
    }
}
