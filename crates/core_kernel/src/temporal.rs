//! Calendar-date handling for coverage periods
//!
//! Policies are written against calendar dates, not instants. A coverage
//! window is inclusive on both ends; a missing end date means the policy
//! runs indefinitely.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format accepted at the system boundary
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Invalid date '{0}': expected a calendar date in YYYY-MM-DD format")]
    InvalidDate(String),
}

/// The span of calendar dates during which a policy covers a car
///
/// Both `start` and `end` are inclusive. An absent `end` leaves the window
/// unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageWindow {
    /// First covered date
    pub start: NaiveDate,
    /// Last covered date, None means open-ended
    pub end: Option<NaiveDate>,
}

impl CoverageWindow {
    /// Creates an open-ended window starting at `start`
    pub fn open_ended(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Creates a bounded window, rejecting an end date before the start date
    pub fn bounded(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end < start {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            start,
            end: Some(end),
        })
    }

    /// Returns true if `date` falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }
}

/// Parses a `YYYY-MM-DD` string into a calendar date
///
/// Impossible dates such as `2024-02-30` or `2024-13-01` are rejected.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(input.to_string()))
}

/// Midnight UTC at the start of `date`
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
