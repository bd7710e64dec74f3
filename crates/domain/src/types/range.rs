//! Inclusive calendar date range

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, DATE_INPUT_LENGTH};
use crate::errors::{BitacoraError, Result};

/// Parse a `YYYY-MM-DD` date typed by a user.
///
/// Surrounding whitespace is ignored. The remaining text must be exactly ten
/// characters with zero-padded month and day; `label` names the value in the
/// error message.
pub fn parse_date(label: &str, input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BitacoraError::InvalidDate(format!("{label} is required")));
    }

    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == DATE_INPUT_LENGTH
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid_date(label, trimmed));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid_date(label, trimmed))
}

fn invalid_date(label: &str, value: &str) -> BitacoraError {
    BitacoraError::InvalidDate(format!("{label} '{value}' is not a valid YYYY-MM-DD date"))
}

/// Inclusive `[start, end]` range of calendar days.
///
/// Construction guarantees `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting inverted bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(BitacoraError::InvalidRange(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse and order-check user supplied bounds.
    ///
    /// Both bounds are parsed before the order check, so a malformed bound
    /// reports `InvalidDate` even when the other one is later.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = parse_date("start date", start)?;
        let end = parse_date("end date", end)?;
        Self::new(start, end)
    }

    /// Range covering a single day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// First day of the range
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the range (both bounds inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
