//! # jlog - Jira worklog companion
//!
//! A command-line client for the Jira Cloud REST API that logs work on
//! issues and shows the month's worklogs as a day-by-issue table.
//!
//! ## Features
//!
//! - **Multi-day logging**: Log the same amount of work for today, a given
//!   date, the current week, the current month or the whole last month
//! - **Worklog overview**: Pivot the month's worklogs into an issue/day table
//! - **Issue overview**: List the issues you worked on in a month
//! - **Env scaffolding**: Dump a `.env` template with the required variables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jlog::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
