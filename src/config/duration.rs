//! `deserialize_with` helper for optional positive durations written as
//! `250ms`, `1s`, `2m` or `1h`.

use serde::{Deserialize, Deserializer, de::Error as _};
use std::time::Duration;

/// Longest suffix first so `ms` is not read as minutes.
const UNITS: [(&str, f64); 4] = [("ms", 0.001), ("h", 3600.0), ("m", 60.0), ("s", 1.0)];

/// An absent key stays `None`; a present one must parse to a positive duration.
pub fn positive<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_duration(&raw).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

pub(crate) fn parse_duration(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();

    let (amount, scale) = UNITS
        .iter()
        .find_map(|(suffix, scale)| raw.strip_suffix(*suffix).map(|n| (n.trim(), *scale)))
        .ok_or_else(|| format!("duration `{}` needs a unit (ms, s, m or h)", raw))?;

    let amount: f64 = amount
        .parse()
        .map_err(|_| format!("duration `{}` has no valid amount", raw))?;

    if amount <= 0.0 {
        return Err(format!("duration `{}` must be positive", raw));
    }

    Duration::try_from_secs_f64(amount * scale)
        .map_err(|e| format!("duration `{}` is out of range: {}", raw, e))
}
