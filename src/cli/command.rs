//! Commands typed at the session prompt

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::desk::Request;

#[derive(Parser, Debug)]
#[command(
    name = "lend",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct CommandLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// View all library items
    #[command(visible_alias = "view")]
    List,

    /// Show one item
    Show {
        /// Item ID
        id: String,
    },

    /// Add a book
    AddBook {
        /// Book ID
        id: String,

        /// Book title (may contain spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Add a magazine
    AddMagazine {
        /// Magazine ID
        id: String,

        /// Magazine issue (may contain spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        issue: Vec<String>,
    },

    /// Borrow an item
    Borrow {
        /// Item ID
        id: String,

        /// Borrow date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        on: Option<NaiveDate>,
    },

    /// Return a borrowed item
    Return {
        /// Item ID
        id: String,
    },

    /// Remove an item from the catalog
    Remove {
        /// Item ID
        id: String,
    },

    /// Show available commands
    Help,

    /// End the session
    #[command(visible_alias = "quit")]
    Exit,
}

/// What the session should do with a parsed line
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Request(Request),
    Help,
    Exit,
}

impl SessionCommand {
    /// Parses one input line; words are separated by whitespace
    pub fn parse_line(line: &str) -> Result<Self, String> {
        CommandLine::try_parse_from(line.split_whitespace())
            .map(|parsed| parsed.command)
            .map_err(|e| first_line(&e.to_string()))
    }

    pub fn into_action(self) -> Action {
        match self {
            SessionCommand::List => Action::Request(Request::List),
            SessionCommand::Show { id } => Action::Request(Request::Find { id }),
            SessionCommand::AddBook { id, title } => Action::Request(Request::AddBook {
                id,
                title: title.join(" "),
            }),
            SessionCommand::AddMagazine { id, issue } => Action::Request(Request::AddMagazine {
                id,
                issue: issue.join(" "),
            }),
            SessionCommand::Borrow { id, on } => Action::Request(Request::Borrow { id, on }),
            SessionCommand::Return { id } => Action::Request(Request::Return { id }),
            SessionCommand::Remove { id } => Action::Request(Request::Remove { id }),
            SessionCommand::Help => Action::Help,
            SessionCommand::Exit => Action::Exit,
        }
    }
}

/// Menu text listing every session command
pub const MENU: &str = "\
Commands:
  list | view                     View library items
  show <id>                       Show one item
  add-book <id> <title>           Add a book (due 4 weeks after borrowing)
  add-magazine <id> <issue>       Add a magazine (due 2 weeks after borrowing)
  borrow <id> [--on YYYY-MM-DD]   Borrow an item
  return <id>                     Return an item
  remove <id>                     Remove an item
  help                            Show this menu
  exit | quit                     End the session";

fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
