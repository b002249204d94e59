//! Expense dates
//!
//! Dates are accepted as `DD-MM-YYYY` or `YYYY-MM-DD` text, stored as
//! `YYYY-MM-DD 00:00:00` and printed as `DD-MM-YYYY` by default.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ExpenseError, ExpenseResult};

/// Format accepted on the command line and used for display
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Accepted input formats, tried in order
const INPUT_FORMATS: [&str; 2] = [DISPLAY_FORMAT, "%Y-%m-%d"];

const STORED_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// A date handed to `add_expense`, either already parsed or still text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl DateInput {
    /// Resolve into a calendar date
    pub fn resolve(&self) -> ExpenseResult<NaiveDate> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Text(text) => parse_date(text),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Parse user-supplied date text in either accepted format
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    let trimmed = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ExpenseError::invalid_date(input))
}

/// Parse `DD-MM-YYYY` only, as required on the command line
pub fn parse_display_date(input: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DISPLAY_FORMAT).map_err(|_| {
        ExpenseError::Parse(format!("'{}' is not a valid date (expected DD-MM-YYYY)", input))
    })
}

/// Canonical stored form of a date
pub fn to_stored(date: NaiveDate) -> String {
    format!("{} 00:00:00", date.format(STORED_DATE_FORMAT))
}

/// Read a stored date back, ignoring any time-of-day part
pub fn from_stored(value: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(value, STORED_DATETIME_FORMAT)
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(value, STORED_DATE_FORMAT))
        .ok()
}
