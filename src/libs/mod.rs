//! Core library modules for jlog.
//!
//! - **Requests**: [`request`] and [`period`] turn command line input into target days
//! - **Submission**: [`submitter`] logs one worklog per target day
//! - **Aggregation**: [`aggregator`] pivots a month of worklogs into a table
//! - **Presentation**: [`formatter`], [`view`] and [`messages`]
//! - **Infrastructure**: [`config`], [`error`] and the [`worklog`] domain types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jlog::api::Jira;
//! use jlog::libs::config::Config;
//! use jlog::libs::request::LogWorkRequest;
//! use jlog::libs::submitter::LogSubmitter;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let jira = Jira::connect(&config.jira).await?;
//! let request = LogWorkRequest::new("PROJ-1", "today", 6.0, "I did some work here", None);
//! let today = chrono::Local::now().date_naive();
//! LogSubmitter::new(&jira).submit(&request, today, |_, _| {}).await?;
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod period;
pub mod request;
pub mod submitter;
pub mod view;
pub mod worklog;
