//! Symbolic logging periods and their expansion into calendar dates.
//!
//! A period is resolved against a reference date (normally today) into the
//! ordered list of days that should receive a worklog:
//!
//! | Period      | Days                                                  |
//! |-------------|-------------------------------------------------------|
//! | `day`       | the reference date                                    |
//! | `week`      | Monday of the reference week up to the reference date, weekdays only |
//! | `month`     | the 1st of the month up to the reference date, weekends included |
//! | `lastmonth` | every day of the previous month                       |
//! | `lastweek`  | not implemented                                       |
//!
//! `week` skips weekends while `month` and `lastmonth` do not. Both behaviours
//! are relied upon by users and are kept as they are.

use super::error::{Result, WorklogError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use clap::ValueEnum;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    #[value(name = "day")]
    Day,
    #[value(name = "week")]
    Week,
    #[value(name = "month")]
    Month,
    #[value(name = "lastweek")]
    LastWeek,
    #[value(name = "lastmonth")]
    LastMonth,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::LastWeek => "lastweek",
            Period::LastMonth => "lastmonth",
        }
    }

    /// Expands the period into the dates to log, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`WorklogError::ExpansionUnsupported`] for [`Period::LastWeek`].
    pub fn expand(&self, reference: NaiveDate) -> Result<Vec<NaiveDate>> {
        match self {
            Period::Day => Ok(vec![reference]),
            Period::Week => {
                let monday = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
                Ok(days_between(monday, reference).into_iter().filter(|date| !is_weekend(date)).collect())
            }
            Period::Month => Ok(days_between(first_of_month(reference), reference)),
            Period::LastMonth => {
                let last_of_previous = first_of_month(reference).pred_opt().ok_or_else(|| out_of_range(reference))?;
                Ok(days_between(first_of_month(last_of_previous), last_of_previous))
            }
            Period::LastWeek => Err(WorklogError::ExpansionUnsupported(*self)),
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

fn is_weekend(date: &NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every date from `start` to `end`, both inclusive.
fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|date| *date <= end).collect()
}

fn out_of_range(reference: NaiveDate) -> WorklogError {
    WorklogError::Validation(format!("no month precedes {}", reference))
}
