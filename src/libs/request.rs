//! The "log work" request built from command-line input.
//!
//! A request either targets one day (an explicit date, or the `today`
//! sentinel) or a [`Period`] that expands into several days. An explicit
//! date always wins over a period.

use super::error::{Result, WorklogError};
use super::messages::Message;
use super::period::Period;
use chrono::NaiveDate;

/// Date sentinel meaning "the current local date".
pub const TODAY: &str = "today";

/// Hours logged per day when `--time` is not given.
pub const DEFAULT_HOURS: f64 = 6.0;

pub const DEFAULT_MESSAGE: &str = "I did some work here";

const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

#[derive(Debug, Clone, PartialEq)]
pub struct LogWorkRequest {
    pub issue_key: String,
    /// `today`, `dd/mm/yyyy` or `yyyy-mm-dd`.
    pub date: String,
    pub hours: f64,
    pub message: String,
    pub period: Option<Period>,
}

impl LogWorkRequest {
    pub fn new(issue_key: &str, date: &str, hours: f64, message: &str, period: Option<Period>) -> Self {
        Self {
            issue_key: issue_key.to_string(),
            date: date.to_string(),
            hours,
            message: message.to_string(),
            period,
        }
    }

    /// Accepts `-d DATE -t HOURS -i KEY` or `-i KEY --period PERIOD`.
    pub fn validate(&self) -> Result<()> {
        let has_issue = !self.issue_key.trim().is_empty();

        if !self.date.trim().is_empty() && self.hours != 0.0 && has_issue {
            return Ok(());
        }

        if has_issue && self.period.is_some() {
            return Ok(());
        }

        Err(WorklogError::Validation(Message::BadFlagCombination.to_string()))
    }

    /// An empty date behaves like the `today` sentinel.
    pub fn is_explicit_date(&self) -> bool {
        let date = self.date.trim();
        !date.is_empty() && !date.eq_ignore_ascii_case(TODAY)
    }

    /// Resolves the days to log against `today`.
    pub fn target_dates(&self, today: NaiveDate) -> Result<Vec<NaiveDate>> {
        if self.is_explicit_date() {
            return Ok(vec![parse_date(&self.date)?]);
        }

        match self.period {
            Some(period) => period.expand(today),
            None => Ok(vec![today]),
        }
    }
}

/// Parses `dd/mm/yyyy` (single-digit day and month allowed) or `yyyy-mm-dd`.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
        .ok_or_else(|| WorklogError::Validation(Message::InvalidDate(date.to_string()).to_string()))
}
