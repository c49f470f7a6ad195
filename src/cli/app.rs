//! Main CLI application structure

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::session::Session;
use crate::config::Config;
use crate::desk::{Clock, Desk, FixedClock};
use crate::domain::LoanPolicy;

#[derive(Parser)]
#[command(name = "lend")]
#[command(author, version, about = "In-memory lending desk for books and magazines")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, global = true, env = "LEND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use this date as today for borrowing (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive lending session (default)
    Session,

    /// Show how long each kind of item may be borrowed
    Policy,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);

    output.verbose("Lending desk starting");
    if let Some(path) = &cli.config {
        output.verbose_ctx("config", &format!("Loaded config from: {}", path.display()));
    }

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => match cli.today {
            Some(today) => {
                output.verbose_ctx("session", &format!("Clock pinned to {}", today));
                session(Desk::with_clock(FixedClock(today)), &config, &output)?
            }
            None => session(Desk::new(), &config, &output)?,
        },
        Commands::Policy => policy(&output),
    }

    output.verbose("Command completed successfully");
    Ok(())
}

fn session<C: Clock>(desk: Desk<C>, config: &Config, output: &Output) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let prompt = interactive.then(|| config.prompt.clone());

    let mut session = Session::new(desk, output, prompt);
    if config.banner {
        session.banner();
    }

    session.run(stdin.lock())
}

fn policy(output: &Output) {
    let policies = [("book", LoanPolicy::BOOK), ("magazine", LoanPolicy::MAGAZINE)];

    if output.is_json() {
        let items: Vec<_> = policies
            .iter()
            .map(|(kind, policy)| {
                serde_json::json!({
                    "kind": kind,
                    "weeks": policy.weeks(),
                })
            })
            .collect();
        output.data(&items);
    } else {
        for (kind, policy) in policies {
            let weeks = format!("{} weeks", policy.weeks());
            output.row(&[kind, weeks.as_str()]);
        }
    }
}
