//! Error types shared by the worklog engine and the Jira gateway.

use super::period::Period;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorklogError {
    /// Malformed request. Raised before any remote call is made.
    #[error("{0}")]
    Validation(String),

    #[error("period '{0}' is not implemented")]
    ExpansionUnsupported(Period),

    /// Network, transport, decoding or authentication failure.
    #[error("Jira request failed: {0}")]
    RemoteCall(String),

    /// Jira answered, but refused the request. Holds the service's own messages.
    #[error("{0}")]
    RemoteRejection(String),

    /// Several dates of a multi-day submission failed.
    #[error("{}", .0.join("\n"))]
    Partial(Vec<String>),

    #[error("{0}")]
    Config(String),
}

impl From<reqwest::Error> for WorklogError {
    fn from(error: reqwest::Error) -> Self {
        WorklogError::RemoteCall(error.to_string())
    }
}

impl From<serde_json::Error> for WorklogError {
    fn from(error: serde_json::Error) -> Self {
        WorklogError::RemoteCall(format!("unexpected response body: {}", error))
    }
}

pub type Result<T> = std::result::Result<T, WorklogError>;
