use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// `YYYY-MM` shape check. Shape only; `9999-99` passes, calendar validity is
/// not the month key's concern.
static SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}$").unwrap());

/// A validated `YYYY-MM` aggregation window.
///
/// Membership is prefix equality: an entity belongs to the month when its
/// governing timestamp formats to the same `YYYY-MM` string. Keys order
/// lexicographically, which for the zero-padded shape is chronological.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MonthKey(String);

#[derive(Debug, Error, PartialEq)]
#[error("month key '{0}' is not in YYYY-MM form")]
pub struct InvalidMonthKey(pub String);

impl MonthKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The month a timestamp falls in.
    pub fn of_datetime(ts: &DateTime<Utc>) -> Self {
        Self(ts.format("%Y-%m").to_string())
    }

    /// The month a calendar date falls in.
    pub fn of_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m").to_string())
    }

    pub fn matches_datetime(&self, ts: &DateTime<Utc>) -> bool {
        ts.format("%Y-%m").to_string() == self.0
    }

    pub fn matches_date(&self, date: NaiveDate) -> bool {
        date.format("%Y-%m").to_string() == self.0
    }
}

impl FromStr for MonthKey {
    type Err = InvalidMonthKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if SHAPE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidMonthKey(s.to_string()))
        }
    }
}
