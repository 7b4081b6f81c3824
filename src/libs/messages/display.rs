//! Display implementation for jlog messages.
//!
//! All message text is defined here, grouped the same way as the variants in
//! [`Message`]. Parameters are interpolated with `format!`.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === LOG WORK MESSAGES ===
            Message::BadFlagCombination => {
                "bad flag combination: use '-i KEY -d DATE -t HOURS' or '-i KEY --period PERIOD'".to_string()
            }
            Message::InvalidDate(date) => format!("invalid date '{}', expected dd/mm/yyyy or yyyy-mm-dd", date),
            Message::PeriodIgnored(period, date) => format!("Ignoring --period {} because an explicit date ({}) was given", period, date),
            Message::LoggingWork { issue_key, duration, days } => {
                format!("Logging {} on {} for {} day(s)", duration, issue_key, days)
            }
            Message::WorkLogged { time_spent, author, started } => {
                format!("{} of work logged for {} on {}", time_spent, author, started)
            }

            // === LIST MESSAGES ===
            Message::InvalidMonth(month, year) => format!("invalid month {}/{}", month, year),
            Message::WorklogsHeader { user, month } => format!("Worklogs of {} for {}", user, month),
            Message::IssuesHeader { user, month } => format!("Issues {} worked on in {}", user, month),
            Message::NoWorklogsFound(month) => format!("No worklogs found for {}", month),
            Message::NoIssuesFound(month) => format!("No issues with worklogs found for {}", month),

            // === CONFIGURATION MESSAGES ===
            Message::EnvVarMissing(name) => {
                format!("could not find {} in the environment (run 'jlog dumpenv' to create a .env template)", name)
            }
            Message::EnvTemplateCreated(path) => format!("Template written to {}. Fill in the values to start using jlog.", path),
            Message::EnvFileExists(path) => format!("{} already exists, not overwriting it", path),
            Message::EnvFileWriteFailed(error) => format!("Failed to write .env template: {}", error),

            // === JIRA MESSAGES ===
            Message::LoggedInAs(name) => format!("Logged in as {}", name),
            Message::JiraAuthenticateFailed(status) => format!("Jira authenticate failed ({})", status),
            Message::JiraUnexpectedStatus(status) => format!("Jira responded with {}", status),
            Message::InvalidEndpoint(url) => format!("JIRA_ENDPOINT does not form a usable URL: {}", url),
            Message::InvalidCredentialsFormat => "Jira credentials contain characters that cannot be sent in a header".to_string(),
        };

        write!(f, "{}", text)
    }
}
