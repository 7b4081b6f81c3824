//! Builds the month's issue/day worklog table.
//!
//! Issues are searched by worklog activity of the current user inside the
//! window, their worklogs are fetched one issue at a time, and the surviving
//! entries are pivoted into an [`AggregationTable`].
//!
//! Two filters apply and they deliberately differ:
//!
//! - issues last updated before the window start are dropped
//! - entries are kept only if they started in the window start's month and year
//!
//! The read is best effort: when the worklogs of one issue cannot be fetched,
//! that issue contributes nothing and the failure is only logged.

use super::error::{Result, WorklogError};
use super::formatter::format_updated;
use super::messages::Message;
use super::worklog::{Issue, WorklogEntry};
use crate::api::WorklogGateway;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Issue key -> day of month -> durations, in the order they were fetched.
pub type AggregationTable = BTreeMap<String, BTreeMap<String, Vec<String>>>;

pub const SUMMARY_COLUMN: &str = "Summary";
pub const UPDATED_COLUMN: &str = "Updated";

/// Local midnight on the 1st of `month`/`year`.
pub fn window_start(year: i32, month: u32) -> Result<DateTime<Local>> {
    let invalid = || WorklogError::Validation(Message::InvalidMonth(month, year).to_string());

    let midnight = NaiveDate::from_ymd_opt(year, month, 1).and_then(|date| date.and_hms_opt(0, 0, 0)).ok_or_else(invalid)?;
    Local.from_local_datetime(&midnight).earliest().ok_or_else(invalid)
}

/// JQL selecting issues the current user logged work on inside the window.
pub fn window_jql(start: &DateTime<Local>, end: &DateTime<Local>) -> String {
    format!(
        "worklogAuthor = currentUser() AND worklogDate >= \"{}\" AND worklogDate <= \"{}\" ORDER BY key ASC",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

pub struct WorklogAggregator<'a, G: WorklogGateway> {
    gateway: &'a G,
}

impl<'a, G: WorklogGateway> WorklogAggregator<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Issues with worklog activity between `start` and `end`.
    pub async fn issues(&self, start: &DateTime<Local>, end: &DateTime<Local>) -> Result<Vec<Issue>> {
        self.gateway.search_issues(&window_jql(start, end)).await
    }

    /// Fetches the window's issues and their worklogs and pivots them.
    ///
    /// # Errors
    ///
    /// Only the issue search can fail; worklog fetch failures are swallowed.
    pub async fn collect(&self, start: &DateTime<Local>, end: &DateTime<Local>) -> Result<AggregationTable> {
        let mut issues = self.issues(start, end).await?;

        for issue in issues.iter_mut() {
            issue.worklogs = match self.gateway.get_worklogs(&issue.key).await {
                Ok(worklogs) => worklogs,
                Err(e) => {
                    tracing::debug!(issue_key = %issue.key, "ignoring worklogs that could not be fetched: {}", e);
                    Vec::new()
                }
            };
        }

        Ok(pivot(&issues, start))
    }
}

/// Pivots issue worklogs into the table, applying the window filters.
pub fn pivot(issues: &[Issue], start: &DateTime<Local>) -> AggregationTable {
    let mut table = AggregationTable::new();

    for issue in issues {
        if issue.updated.is_some_and(|updated| updated < *start) {
            continue;
        }

        for entry in issue.worklogs.iter().filter(|entry| in_window_month(entry, start)) {
            table
                .entry(issue.key.clone())
                .or_default()
                .entry(entry.started.day().to_string())
                .or_default()
                .push(entry.time_spent.clone());
        }
    }

    table
}

/// Issue overview table with summary and last update per issue.
pub fn summarize_issues(issues: &[Issue]) -> AggregationTable {
    issues
        .iter()
        .map(|issue| {
            let mut columns = BTreeMap::new();
            columns.insert(SUMMARY_COLUMN.to_string(), vec![issue.summary.clone()]);
            columns.insert(UPDATED_COLUMN.to_string(), vec![issue.updated.as_ref().map(format_updated).unwrap_or_default()]);
            (issue.key.clone(), columns)
        })
        .collect()
}

fn in_window_month(entry: &WorklogEntry, start: &DateTime<Local>) -> bool {
    entry.started.year() == start.year() && entry.started.month() == start.month()
}
