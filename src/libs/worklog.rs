use chrono::{DateTime, Local};

/// A single worklog as confirmed or returned by Jira.
#[derive(Debug, Clone, PartialEq)]
pub struct WorklogEntry {
    pub author: String,
    /// Human-readable duration as rendered by Jira, e.g. "6h" or "1d 2h".
    pub time_spent: String,
    pub time_spent_seconds: i64,
    pub started: DateTime<Local>,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: String,
    pub key: String,
    pub summary: String,
    pub updated: Option<DateTime<Local>>,
    /// Empty until loaded with a separate worklog request.
    pub worklogs: Vec<WorklogEntry>,
}

/// One page of an issue search.
#[derive(Debug, Clone, Default)]
pub struct IssuePage {
    pub issues: Vec<Issue>,
    pub next_page_token: Option<String>,
}
