//! Custom deserialization helpers for query strings and form bodies.

use serde::{Deserialize, Deserializer};

/// Parses a raw query or form value, treating blank or non-integer input
/// as missing.
pub fn parse_lenient_i64(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Deserializes an optional integer leniently.
///
/// Query strings and form fields arrive as strings. Empty strings and values
/// that do not parse as an `i64` become `None` instead of rejecting the
/// request, so callers can substitute their own defaults.
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    let raw: Option<Raw> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Int(n)) => Some(n),
        Some(Raw::Text(s)) => parse_lenient_i64(&s),
        None => None,
    })
}
