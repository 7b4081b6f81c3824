use crate::{
    api::Jira,
    libs::{
        config::Config,
        formatter::{format_seconds, format_started},
        messages::Message,
        period::Period,
        request::{LogWorkRequest, DEFAULT_HOURS, DEFAULT_MESSAGE, TODAY},
        submitter::{hours_to_seconds, LogSubmitter},
    },
};
use crate::{msg_debug, msg_info, msg_success, msg_warning};
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogWorkArgs {
    #[arg(short, long = "issue-key", visible_alias = "issueKey", default_value = "", help = "Issue key, e.g. PROJ-123")]
    issue_key: String,
    #[arg(short, long, default_value = TODAY, help = "Date to log: today, dd/mm/yyyy or yyyy-mm-dd")]
    date: String,
    #[arg(short, long, default_value_t = DEFAULT_HOURS, help = "Hours to log per day")]
    time: f64,
    #[arg(short, long, default_value = DEFAULT_MESSAGE, help = "Worklog comment")]
    message: String,
    #[arg(long, value_enum, help = "Log every day of a period instead of a single date")]
    period: Option<Period>,
}

pub async fn cmd(args: LogWorkArgs) -> anyhow::Result<()> {
    let request = LogWorkRequest::new(&args.issue_key, &args.date, args.time, &args.message, args.period);
    request.validate()?;

    if let (true, Some(period)) = (request.is_explicit_date(), request.period) {
        msg_warning!(Message::PeriodIgnored(period.to_string(), request.date.trim().to_string()));
    }

    let today = Local::now().date_naive();
    let days = request.target_dates(today)?;

    let config = Config::from_env()?;
    let jira = Jira::connect(&config.jira).await?;
    msg_debug!(Message::LoggedInAs(jira.user().display_name.clone()));

    msg_info!(Message::LoggingWork {
        issue_key: request.issue_key.trim().to_string(),
        duration: format_seconds(hours_to_seconds(request.hours)),
        days: days.len(),
    });

    LogSubmitter::new(&jira)
        .submit(&request, today, |_, entry| {
            msg_success!(Message::WorkLogged {
                time_spent: entry.time_spent.clone(),
                author: entry.author.clone(),
                started: format_started(&entry.started),
            });
        })
        .await?;

    Ok(())
}
