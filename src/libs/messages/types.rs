#[derive(Debug, Clone)]
pub enum Message {
    // === LOG WORK MESSAGES ===
    BadFlagCombination,
    InvalidDate(String),
    PeriodIgnored(String, String), // period, date
    LoggingWork {
        issue_key: String,
        duration: String,
        days: usize,
    },
    WorkLogged {
        time_spent: String,
        author: String,
        started: String,
    },

    // === LIST MESSAGES ===
    InvalidMonth(u32, i32), // month, year
    WorklogsHeader {
        user: String,
        month: String,
    },
    IssuesHeader {
        user: String,
        month: String,
    },
    NoWorklogsFound(String), // month
    NoIssuesFound(String),   // month

    // === CONFIGURATION MESSAGES ===
    EnvVarMissing(String),      // variable name
    EnvTemplateCreated(String), // path
    EnvFileExists(String),      // path
    EnvFileWriteFailed(String), // error

    // === JIRA MESSAGES ===
    LoggedInAs(String),             // display name
    JiraAuthenticateFailed(String), // status
    JiraUnexpectedStatus(String),   // status
    InvalidCredentialsFormat,
    InvalidEndpoint(String), // base URL
}
