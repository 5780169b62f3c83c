use chrono::Duration;
use thiserror::Error;

/// Error for token lifetime parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExpiryError {
    #[error("Expiry is empty")]
    Empty,

    #[error("Invalid expiry amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown expiry unit: {0}")]
    UnknownUnit(String),

    #[error("Expiry must be greater than zero")]
    NotPositive,
}

/// Parse a token lifetime such as `"1d"`, `"24h"`, `"30m"` or `"3600"`.
///
/// Supported units: `s`, `m`, `h`, `d`, `w`. A bare integer is seconds.
///
/// # Errors
/// * `Empty` - Input is blank
/// * `InvalidAmount` - Numeric part is missing or not an integer
/// * `UnknownUnit` - Suffix is not one of the supported units
/// * `NotPositive` - Amount is zero
pub fn parse_duration(input: &str) -> Result<Duration, ExpiryError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExpiryError::Empty);
    }

    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (amount, unit) = input.split_at(split);

    let amount: i64 = amount
        .parse()
        .map_err(|_| ExpiryError::InvalidAmount(input.to_string()))?;

    if amount <= 0 {
        return Err(ExpiryError::NotPositive);
    }

    let seconds_per_unit = match unit.trim() {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        "w" => 7 * 24 * 60 * 60,
        other => return Err(ExpiryError::UnknownUnit(other.to_string())),
    };

    amount
        .checked_mul(seconds_per_unit)
        .and_then(Duration::try_seconds)
        .ok_or_else(|| ExpiryError::InvalidAmount(input.to_string()))
}
