//! Jira Cloud REST API (v3) client.
//!
//! Authenticates with an account e-mail and API token (basic auth) and
//! implements [`WorklogGateway`] on top of the issue search, worklog list and
//! worklog creation endpoints.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jlog::api::jira::{Jira, JiraConfig};
//!
//! # async fn run() -> jlog::libs::error::Result<()> {
//! let config = JiraConfig {
//!     email: "me@example.com".to_string(),
//!     api_key: "ATATT3x...".to_string(),
//!     endpoint: "example.atlassian.net".to_string(),
//! };
//!
//! let jira = Jira::connect(&config).await?;
//! println!("Logged in as {}", jira.user().display_name);
//! # Ok(())
//! # }
//! ```

use super::{document, timestamp, WorklogGateway};
use crate::libs::error::{Result, WorklogError};
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::libs::worklog::{Issue, IssuePage, WorklogEntry};
use base64::prelude::*;
use chrono::{DateTime, Local};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Client, Response, StatusCode, Url,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// Include generated metadata with the package name and version
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

const MYSELF_URL: &str = "rest/api/3/myself";
const SEARCH_URL: &str = "rest/api/3/search/jql";
const SEARCH_PAGE_SIZE: u32 = 100;
const WORKLOG_PAGE_SIZE: u32 = 1000;
const ISSUE_FIELDS: [&str; 3] = ["key", "summary", "updated"];
const ISSUE_PATH: [&str; 4] = ["rest", "api", "3", "issue"];

#[derive(Clone, PartialEq)]
pub struct JiraConfig {
    /// Atlassian account e-mail used as the basic auth user name.
    pub email: String,
    pub api_key: String,
    /// Site host such as `example.atlassian.net`, or a full base URL.
    pub endpoint: String,
}

impl JiraConfig {
    /// Base URL without a trailing slash. Bare hosts are served over HTTPS.
    pub fn base_url(&self) -> String {
        let endpoint = self.endpoint.trim().trim_end_matches('/');
        if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
            endpoint.to_string()
        } else {
            format!("https://{}", endpoint)
        }
    }

    fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.email, self.api_key);
        format!("Basic {}", BASE64_STANDARD.encode(credentials))
    }
}

impl fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JiraConfig")
            .field("email", &self.email)
            .field("api_key", &"***")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    jql: &'a str,
    max_results: u32,
    fields: &'a [&'a str],
    #[serde(skip_serializing_if = "Option::is_none")]
    next_page_token: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<JiraIssue>,
    #[serde(default)]
    next_page_token: Option<String>,
    #[serde(default)]
    is_last: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct JiraIssue {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub fields: JiraIssueFields,
}

#[derive(Deserialize, Debug, Default)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub updated: Option<DateTime<Local>>,
}

impl From<JiraIssue> for Issue {
    fn from(issue: JiraIssue) -> Self {
        Issue {
            id: issue.id,
            key: issue.key,
            summary: issue.fields.summary,
            updated: issue.fields.updated,
            worklogs: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WorklogsResponse {
    #[serde(default)]
    total: u32,
    #[serde(default)]
    worklogs: Vec<JiraWorklog>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorklog {
    #[serde(default)]
    pub author: Option<JiraUser>,
    #[serde(default)]
    pub comment: Option<Value>,
    #[serde(default)]
    pub time_spent: String,
    #[serde(default)]
    pub time_spent_seconds: i64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub started: DateTime<Local>,
}

impl From<JiraWorklog> for WorklogEntry {
    fn from(worklog: JiraWorklog) -> Self {
        let time_spent = match worklog.time_spent.trim() {
            "" => format_seconds(worklog.time_spent_seconds),
            time_spent => time_spent.to_string(),
        };

        WorklogEntry {
            author: worklog.author.map(|author| author.display_name).unwrap_or_default(),
            time_spent,
            time_spent_seconds: worklog.time_spent_seconds,
            started: worklog.started,
            comment: worklog.comment.as_ref().map(document::plain_text).unwrap_or_default(),
        }
    }
}

/// Body of `POST /rest/api/3/issue/{key}/worklog`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPayload {
    pub comment: Value,
    #[serde(serialize_with = "timestamp::serialize")]
    pub started: DateTime<Local>,
    pub time_spent_seconds: i64,
}

impl WorklogPayload {
    pub fn new(started: DateTime<Local>, duration_seconds: i64, comment: &str) -> Self {
        Self {
            comment: document::paragraph(comment),
            started,
            time_spent_seconds: duration_seconds,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JiraErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: BTreeMap<String, Value>,
}

/// Worklog collection URL of an issue. The key is a single percent-encoded
/// path segment, so `/`, `?` and `#` cannot change the request target.
pub fn worklog_url(base_url: &str, issue_key: &str) -> Result<Url> {
    let invalid = || WorklogError::Config(Message::InvalidEndpoint(base_url.to_string()).to_string());

    let mut url = Url::parse(base_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(ISSUE_PATH)
        .push(issue_key.trim())
        .push("worklog");

    Ok(url)
}

/// Maps a non-success response to an error.
///
/// Authentication (401/403) and server errors are transport-level failures;
/// anything else is a rejection carrying Jira's own error messages.
pub fn classify(status: StatusCode, body: &str) -> WorklogError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return WorklogError::RemoteCall(Message::JiraAuthenticateFailed(status.to_string()).to_string());
    }
    if status.is_server_error() {
        return WorklogError::RemoteCall(Message::JiraUnexpectedStatus(status.to_string()).to_string());
    }

    let error_body: JiraErrorBody = serde_json::from_str(body).unwrap_or_default();
    let mut messages = error_body.error_messages;

    if messages.is_empty() {
        messages = error_body
            .errors
            .iter()
            .map(|(field, error)| match error.as_str() {
                Some(error) => format!("{}: {}", field, error),
                None => format!("{}: {}", field, error),
            })
            .collect();
    }

    if messages.is_empty() {
        messages.push(Message::JiraUnexpectedStatus(status.to_string()).to_string());
    }

    WorklogError::RemoteRejection(messages.join("\n"))
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    base_url: String,
    user: JiraUser,
}

impl Jira {
    /// Builds the HTTP client and checks the credentials with `/myself`.
    pub async fn connect(config: &JiraConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION))
                .map_err(|e| WorklogError::Config(e.to_string()))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&config.basic_auth()).map_err(|_| WorklogError::Config(Message::InvalidCredentialsFormat.to_string()))?,
        );

        let client = Client::builder().default_headers(headers).build()?;
        let mut jira = Self {
            client,
            base_url: config.base_url(),
            user: JiraUser::default(),
        };

        jira.user = jira.myself().await?;
        tracing::debug!(account_id = %jira.user.account_id, "authenticated against {}", jira.base_url);
        Ok(jira)
    }

    pub fn user(&self) -> &JiraUser {
        &self.user
    }

    async fn myself(&self) -> Result<JiraUser> {
        let response = self.client.get(self.url(MYSELF_URL)).send().await?;
        Self::read(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }


    async fn read<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, %body, "Jira returned an error");
            return Err(classify(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl WorklogGateway for Jira {
    async fn search_page(&self, jql: &str, page_token: Option<String>) -> Result<IssuePage> {
        let request = SearchRequest {
            jql,
            max_results: SEARCH_PAGE_SIZE,
            fields: &ISSUE_FIELDS,
            next_page_token: page_token,
        };

        tracing::debug!(%jql, "searching issues");
        let response = self.client.post(self.url(SEARCH_URL)).json(&request).send().await?;
        let page: SearchResponse = Self::read(response).await?;

        let next_page_token = match page.is_last {
            Some(true) => None,
            _ => page.next_page_token,
        };

        Ok(IssuePage {
            issues: page.issues.into_iter().map(Issue::from).collect(),
            next_page_token,
        })
    }

    async fn get_worklogs(&self, issue_key: &str) -> Result<Vec<WorklogEntry>> {
        let mut entries = Vec::new();
        let mut start_at: u32 = 0;

        loop {
            let response = self
                .client
                .get(worklog_url(&self.base_url, issue_key)?)
                .query(&[("startAt", start_at), ("maxResults", WORKLOG_PAGE_SIZE)])
                .send()
                .await?;
            let page: WorklogsResponse = Self::read(response).await?;

            let fetched = page.worklogs.len() as u32;
            entries.extend(page.worklogs.into_iter().map(WorklogEntry::from));
            start_at += fetched;

            if fetched == 0 || start_at >= page.total {
                break;
            }
        }

        tracing::debug!(%issue_key, count = entries.len(), "fetched worklogs");
        Ok(entries)
    }

    async fn submit_worklog(&self, issue_key: &str, started: DateTime<Local>, duration_seconds: i64, comment: &str) -> Result<WorklogEntry> {
        let payload = WorklogPayload::new(started, duration_seconds, comment);

        tracing::debug!(%issue_key, started = %timestamp::format(&started), duration_seconds, "submitting worklog");
        let response = self.client.post(worklog_url(&self.base_url, issue_key)?).json(&payload).send().await?;
        let worklog: JiraWorklog = Self::read(response).await?;

        Ok(worklog.into())
    }
}
