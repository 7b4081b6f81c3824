//! Submits a [`LogWorkRequest`] as one worklog per target day.
//!
//! Days are submitted strictly one after another. A failing day does not stop
//! the remaining ones: every failure is collected and reported once all days
//! have been attempted, while each success is handed to the caller as soon as
//! Jira confirms it.

use super::error::{Result, WorklogError};
use super::request::LogWorkRequest;
use super::worklog::WorklogEntry;
use crate::api::WorklogGateway;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Local time of day every worklog starts at.
pub const WORK_START_HOUR: u32 = 10;

/// Converts a date into the worklog start timestamp (10:00 local time).
pub fn work_start(date: NaiveDate) -> Result<DateTime<Local>> {
    let start = date
        .and_hms_opt(WORK_START_HOUR, 0, 0)
        .ok_or_else(|| WorklogError::Validation(format!("invalid start time for {}", date)))?;

    Local
        .from_local_datetime(&start)
        .earliest()
        .ok_or_else(|| WorklogError::Validation(format!("{} does not exist in the local time zone", start)))
}

/// Converts fractional hours into whole seconds for the wire payload.
pub fn hours_to_seconds(hours: f64) -> i64 {
    (hours * 3600.0).round() as i64
}

pub struct LogSubmitter<'a, G: WorklogGateway> {
    gateway: &'a G,
}

impl<'a, G: WorklogGateway> LogSubmitter<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Validates the request, resolves its days against `today` and submits
    /// one worklog per day.
    ///
    /// `on_logged` is called after every confirmed submission, before the
    /// next day is attempted.
    ///
    /// # Errors
    ///
    /// - [`WorklogError::Validation`] / [`WorklogError::ExpansionUnsupported`]
    ///   before anything is submitted
    /// - the submission error itself when the request targets a single day
    /// - [`WorklogError::Partial`] with every failure message when several
    ///   days were targeted and at least one failed
    pub async fn submit<F>(&self, request: &LogWorkRequest, today: NaiveDate, mut on_logged: F) -> Result<Vec<WorklogEntry>>
    where
        F: FnMut(NaiveDate, &WorklogEntry),
    {
        request.validate()?;
        let dates = request.target_dates(today)?;
        let seconds = hours_to_seconds(request.hours);

        let mut logged = Vec::with_capacity(dates.len());
        let mut failures = Vec::new();

        for date in &dates {
            match self.submit_one(request, *date, seconds).await {
                Ok(entry) => {
                    on_logged(*date, &entry);
                    logged.push(entry);
                }
                Err(e) => {
                    tracing::warn!(issue_key = %request.issue_key, %date, "worklog submission failed: {}", e);
                    failures.push(e);
                }
            }
        }

        if dates.len() == 1 {
            if let Some(failure) = failures.pop() {
                return Err(failure);
            }
        }

        if !failures.is_empty() {
            return Err(WorklogError::Partial(failures.iter().map(ToString::to_string).collect()));
        }

        Ok(logged)
    }

    async fn submit_one(&self, request: &LogWorkRequest, date: NaiveDate, seconds: i64) -> Result<WorklogEntry> {
        let started = work_start(date)?;
        self.gateway.submit_worklog(request.issue_key.trim(), started, seconds, &request.message).await
    }
}
