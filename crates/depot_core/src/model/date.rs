//! Calendar-day stamps used by dated records.
//!
//! # Responsibility
//! - Validate `YYYY-MM-DD` day strings once, at the edge.
//! - Keep day ordering cheap: the ISO layout sorts chronologically as text.
//!
//! # Invariants
//! - A constructed `DayStamp` always holds a well-formed day string.
//! - Comparison and equality are plain string operations.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid day regex"));

/// Validated `YYYY-MM-DD` calendar day.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct DayStamp(String);

impl DayStamp {
    /// Parses a day string, rejecting anything that is not a plausible
    /// `YYYY-MM-DD` value.
    pub fn parse(value: &str) -> Result<Self, DayStampError> {
        let trimmed = value.trim();
        let captures = DAY_RE
            .captures(trimmed)
            .ok_or_else(|| DayStampError::new(value))?;

        let month: u32 = captures[2].parse().map_err(|_| DayStampError::new(value))?;
        let day: u32 = captures[3].parse().map_err(|_| DayStampError::new(value))?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(DayStampError::new(value));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DayStamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DayStamp {
    type Error = DayStampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DayStamp> for String {
    fn from(value: DayStamp) -> Self {
        value.0
    }
}

/// Rejected day string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStampError {
    value: String,
}

impl DayStampError {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl Display for DayStampError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid day `{}`; expected YYYY-MM-DD", self.value)
    }
}

impl Error for DayStampError {}

#[cfg(test)]
mod tests {
    use super::DayStamp;

    #[test]
    fn parse_accepts_iso_days_and_trims() {
        let day = DayStamp::parse(" 2026-02-22 ").unwrap();
        assert_eq!(day.as_str(), "2026-02-22");
    }

    #[test]
    fn parse_rejects_malformed_values() {
        for bad in ["", "22/02/2026", "2026-2-2", "2026-13-01", "2026-00-10", "2026-01-32"] {
            assert!(DayStamp::parse(bad).is_err(), "accepted `{bad}`");
        }
    }

    #[test]
    fn iso_layout_orders_chronologically() {
        let earlier = DayStamp::parse("2026-02-19").unwrap();
        let later = DayStamp::parse("2026-02-22").unwrap();
        assert!(earlier < later);
    }
}
