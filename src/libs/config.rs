//! Configuration loaded from the environment.
//!
//! jlog needs three variables, usually kept in a `.env` file in the working
//! directory:
//!
//! - **`JIRA_API_KEY`**: Atlassian API token
//! - **`JIRA_ENDPOINT`**: Jira site, e.g. `example.atlassian.net`
//! - **`JIRA_USER_EMAIL`**: account e-mail the token belongs to
//!
//! `jlog dumpenv` writes a commented template of that file.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use jlog::libs::config::Config;
//!
//! // Loads .env (when present) and reads the process environment
//! let config = Config::from_env()?;
//! println!("Jira URL: {}", config.jira.base_url());
//! # Ok::<(), jlog::libs::error::WorklogError>(())
//! ```

use super::error::{Result, WorklogError};
use super::messages::Message;
use crate::api::jira::JiraConfig;
use std::env;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const JIRA_API_KEY: &str = "JIRA_API_KEY";
pub const JIRA_ENDPOINT: &str = "JIRA_ENDPOINT";
pub const JIRA_USER_EMAIL: &str = "JIRA_USER_EMAIL";

/// Every variable jlog reads, in template order.
pub const ENV_VAR_NAMES: [&str; 3] = [JIRA_API_KEY, JIRA_ENDPOINT, JIRA_USER_EMAIL];

pub const ENV_FILE_NAME: &str = ".env";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub jira: JiraConfig,
}

impl Config {
    /// Loads `.env` from the working directory (if any) and reads the
    /// configuration from the process environment.
    ///
    /// Variables already set in the environment win over the `.env` file.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("no .env file loaded: {}", e);
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`WorklogError::Config`] naming the first missing or empty
    /// variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String> {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| WorklogError::Config(Message::EnvVarMissing(name.to_string()).to_string()))
        };

        Ok(Self {
            jira: JiraConfig {
                api_key: require(JIRA_API_KEY)?,
                endpoint: require(JIRA_ENDPOINT)?,
                email: require(JIRA_USER_EMAIL)?,
            },
        })
    }

    /// Contents of the `.env` template: one commented assignment per variable.
    pub fn env_template() -> String {
        ENV_VAR_NAMES.iter().map(|name| format!("# {}=\n", name)).collect()
    }

    /// Writes the `.env` template into `dir` and returns its path.
    ///
    /// # Errors
    ///
    /// Refuses to overwrite an existing file.
    pub fn dump_env(dir: &Path) -> Result<PathBuf> {
        let path = dir.join(ENV_FILE_NAME);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(WorklogError::Config(Message::EnvFileExists(path.display().to_string()).to_string()));
            }
            Err(e) => return Err(WorklogError::Config(Message::EnvFileWriteFailed(e.to_string()).to_string())),
        };

        file.write_all(Self::env_template().as_bytes())
            .map_err(|e| WorklogError::Config(Message::EnvFileWriteFailed(e.to_string()).to_string()))?;

        Ok(path)
    }
}
