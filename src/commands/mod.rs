//! Command line interface.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and an
//! async `cmd` entry point.

pub mod dumpenv;
pub mod list;
pub mod logwork;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Log work on an issue for a date or a period")]
    Logwork(logwork::LogWorkArgs),
    #[command(about = "List your issues or worklogs for a month")]
    List(list::ListArgs),
    #[command(about = "Write a .env template with the required variables")]
    Dumpenv,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Logwork(args) => logwork::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Dumpenv => dumpenv::cmd().await,
        }
    }
}
