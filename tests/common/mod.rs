#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use jlog::api::WorklogGateway;
use jlog::libs::error::{Result, WorklogError};
use jlog::libs::formatter::format_seconds;
use jlog::libs::worklog::{Issue, IssuePage, WorklogEntry};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

pub const MOCK_AUTHOR: &str = "Test User";

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub issue_key: String,
    pub started: DateTime<Local>,
    pub duration_seconds: i64,
    pub comment: String,
}

/// In-memory gateway recording every call it receives.
#[derive(Default)]
pub struct MockGateway {
    pub pages: Vec<IssuePage>,
    pub worklogs: HashMap<String, Vec<WorklogEntry>>,
    pub broken_issues: HashSet<String>,
    pub failing_dates: HashSet<NaiveDate>,
    pub submissions: RefCell<Vec<Submission>>,
    pub searches: RefCell<Vec<(String, Option<String>)>>,
}

impl MockGateway {
    /// One search page per inner vector, chained with tokens "1", "2", ...
    pub fn with_pages(pages: Vec<Vec<Issue>>) -> Self {
        let count = pages.len();
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(index, issues)| IssuePage {
                issues,
                next_page_token: if index + 1 < count { Some((index + 1).to_string()) } else { None },
            })
            .collect();

        Self { pages, ..Default::default() }
    }

    pub fn with_worklogs(mut self, issue_key: &str, entries: Vec<WorklogEntry>) -> Self {
        self.worklogs.insert(issue_key.to_string(), entries);
        self
    }

    pub fn with_broken_issue(mut self, issue_key: &str) -> Self {
        self.broken_issues.insert(issue_key.to_string());
        self
    }

    pub fn failing_on(mut self, date: NaiveDate) -> Self {
        self.failing_dates.insert(date);
        self
    }

    pub fn submitted_dates(&self) -> Vec<NaiveDate> {
        self.submissions.borrow().iter().map(|submission| submission.started.date_naive()).collect()
    }
}

impl WorklogGateway for MockGateway {
    async fn search_page(&self, jql: &str, page_token: Option<String>) -> Result<IssuePage> {
        self.searches.borrow_mut().push((jql.to_string(), page_token.clone()));

        let index = match page_token {
            Some(token) => token.parse::<usize>().map_err(|e| WorklogError::RemoteCall(e.to_string()))?,
            None => 0,
        };

        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }

    async fn get_worklogs(&self, issue_key: &str) -> Result<Vec<WorklogEntry>> {
        if self.broken_issues.contains(issue_key) {
            return Err(WorklogError::RemoteCall(format!("connection reset while reading {}", issue_key)));
        }

        Ok(self.worklogs.get(issue_key).cloned().unwrap_or_default())
    }

    async fn submit_worklog(&self, issue_key: &str, started: DateTime<Local>, duration_seconds: i64, comment: &str) -> Result<WorklogEntry> {
        self.submissions.borrow_mut().push(Submission {
            issue_key: issue_key.to_string(),
            started,
            duration_seconds,
            comment: comment.to_string(),
        });

        if self.failing_dates.contains(&started.date_naive()) {
            return Err(WorklogError::RemoteRejection(format!("Worklog rejected for {}", started.date_naive())));
        }

        Ok(WorklogEntry {
            author: MOCK_AUTHOR.to_string(),
            time_spent: format_seconds(duration_seconds),
            time_spent_seconds: duration_seconds,
            started,
            comment: comment.to_string(),
        })
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(year, month, day, hour, minute, 0).earliest().unwrap()
}

pub fn entry(started: DateTime<Local>, time_spent: &str) -> WorklogEntry {
    WorklogEntry {
        author: MOCK_AUTHOR.to_string(),
        time_spent: time_spent.to_string(),
        time_spent_seconds: 0,
        started,
        comment: String::new(),
    }
}

pub fn issue(key: &str, updated: Option<DateTime<Local>>, worklogs: Vec<WorklogEntry>) -> Issue {
    Issue {
        id: key.trim_start_matches(|c: char| !c.is_ascii_digit()).to_string(),
        key: key.to_string(),
        summary: format!("Summary of {}", key),
        updated,
        worklogs,
    }
}
