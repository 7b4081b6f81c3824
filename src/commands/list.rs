use crate::{
    api::Jira,
    libs::{
        aggregator::{summarize_issues, window_start, WorklogAggregator},
        config::Config,
        messages::Message,
        view::View,
    },
};
use crate::{msg_info, msg_print};
use chrono::{Datelike, Local};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listable {
    Issues,
    Worklogs,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, value_enum, help = "What to list")]
    object: Listable,
    #[arg(short, long, help = "Month number (1-12), defaults to the current month")]
    month: Option<u32>,
    #[arg(short, long, help = "Year, defaults to the current year")]
    year: Option<i32>,
}

pub async fn cmd(args: ListArgs) -> anyhow::Result<()> {
    let end = Local::now();
    let start = window_start(args.year.unwrap_or(end.year()), args.month.unwrap_or(end.month()))?;
    let month = start.format("%B %Y").to_string();

    let config = Config::from_env()?;
    let jira = Jira::connect(&config.jira).await?;
    let user = jira.user().display_name.clone();
    let aggregator = WorklogAggregator::new(&jira);

    match args.object {
        Listable::Worklogs => {
            let table = aggregator.collect(&start, &end).await?;
            msg_print!(Message::WorklogsHeader { user, month: month.clone() }, true);
            if table.is_empty() {
                msg_info!(Message::NoWorklogsFound(month));
            } else {
                View::table(&table);
            }
        }
        Listable::Issues => {
            let issues = aggregator.issues(&start, &end).await?;
            msg_print!(Message::IssuesHeader { user, month: month.clone() }, true);
            if issues.is_empty() {
                msg_info!(Message::NoIssuesFound(month));
            } else {
                View::table(&summarize_issues(&issues));
            }
        }
    }

    Ok(())
}
