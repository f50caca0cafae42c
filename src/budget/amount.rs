//! Lenient parsing of monetary amounts.
//!
//! Amounts typed into the planner form or sent by JSON clients are never
//! allowed to fail a computation. Anything that is not a non-negative, finite
//! number is treated as zero.

use serde::{Deserialize, Deserializer};

/// Clamp `value` to a non-negative, finite amount.
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a user-typed amount, treating unparseable input as zero.
///
/// Surrounding whitespace is ignored, as is a single leading dollar sign.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim();
    let text = text.strip_prefix('$').unwrap_or(text);

    text.parse::<f64>().map(sanitize_amount).unwrap_or(0.0)
}

/// The forms an amount may take in a JSON document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawAmount {
    fn into_amount(self) -> f64 {
        match self {
            RawAmount::Number(number) => sanitize_amount(number),
            RawAmount::Text(text) => parse_amount(&text),
            RawAmount::Other(_) => 0.0,
        }
    }
}

/// Deserialize an amount from a number, a numeric string or null.
///
/// Use with `#[serde(deserialize_with = "deserialize_amount")]`.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;

    Ok(raw.map(RawAmount::into_amount).unwrap_or(0.0))
}

/// Deserialize an amount that may be absent.
///
/// Returns `None` for null so that callers can tell a missing field apart
/// from one set to an unparseable value, which becomes `Some(0.0)`.
/// Pair it with `#[serde(default)]` so that an absent field is also `None`.
pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;

    Ok(raw.map(RawAmount::into_amount))
}

/// The fraction `part / total`, or zero when `total` is zero.
pub fn share_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }

    let share = part / total;

    if share.is_finite() { share } else { 0.0 }
}

/// Round `value` to the nearest cent.
///
/// Sub-cent residues from float arithmetic, e.g. `33.1 + 66.2 - 99.3`, become
/// zero. Negative zero and non-finite values become `0.0`.
pub fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;

    if rounded.is_finite() && rounded != 0.0 {
        rounded
    } else {
        0.0
    }
}



#[cfg(test)]
mod share_of_tests {
    use super::share_of;

    #[test]
    fn zero_total_gives_zero_share() {
        assert_eq!(share_of(10.0, 0.0), 0.0);
        assert_eq!(share_of(0.0, 0.0), 0.0);
    }

    #[test]
    fn computes_fraction() {
        assert_eq!(share_of(25.0, 100.0), 0.25);
    }
}
