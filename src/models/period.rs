//! Calendar-month filter for expenses
//!
//! Summaries and expense listings can be restricted to a single month
//! ("2025-01"). The filter is applied by the caller before the settlement
//! engine runs.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthFilter {
    pub year: i32,
    pub month: u32,
}

impl MonthFilter {
    /// Create a month filter, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Build a filter from optional month and year arguments
    ///
    /// The filter only applies when both parts are given; a lone month or
    /// year means "no filter".
    pub fn from_parts(
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Option<Self>, PeriodParseError> {
        match (month, year) {
            (Some(month), Some(year)) => Self::new(year, month).map(Some),
            _ => Ok(None),
        }
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Errors from building a month filter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodParseError {
    #[error("Invalid period format '{0}', expected YYYY-MM")]
    InvalidFormat(String),
    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),
}
