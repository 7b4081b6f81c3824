//! Remote access to issues and worklogs.
//!
//! The worklog engine talks to the issue tracker only through
//! [`WorklogGateway`]. [`jira::Jira`] implements it against the Jira Cloud
//! REST API; tests use an in-memory implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jlog::api::{jira::Jira, WorklogGateway};
//! use jlog::libs::config::Config;
//!
//! # async fn run() -> jlog::libs::error::Result<()> {
//! let config = Config::from_env()?;
//! let jira = Jira::connect(&config.jira).await?;
//! let issues = jira.search_issues("worklogAuthor = currentUser()").await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::Result;
use crate::libs::worklog::{Issue, IssuePage, WorklogEntry};
use chrono::{DateTime, Local};

pub mod document;
pub mod jira;
pub mod timestamp;

pub use jira::{Jira, JiraUser};

/// Remote operations the worklog engine depends on.
///
/// All calls are awaited one at a time; implementations need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait WorklogGateway {
    /// Fetches one page of issues matching `jql`.
    ///
    /// `page_token` is `None` for the first page and the previous page's
    /// `next_page_token` afterwards.
    async fn search_page(&self, jql: &str, page_token: Option<String>) -> Result<IssuePage>;

    /// Fetches every worklog of an issue, in the order Jira returns them.
    async fn get_worklogs(&self, issue_key: &str) -> Result<Vec<WorklogEntry>>;

    /// Creates a worklog and returns the entry as confirmed by the service.
    async fn submit_worklog(&self, issue_key: &str, started: DateTime<Local>, duration_seconds: i64, comment: &str) -> Result<WorklogEntry>;

    /// Fetches all issues matching `jql`, following continuation tokens
    /// until the last page.
    async fn search_issues(&self, jql: &str) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        let mut page_token = None;

        loop {
            let page = self.search_page(jql, page_token).await?;
            issues.extend(page.issues);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(issues)
    }
}
