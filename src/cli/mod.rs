//! # Command-Line Interface
//!
//! A thin shell over the [`desk`](crate::desk): parses session commands,
//! forwards them as requests, and renders the responses.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `lend` / `lend session` | Interactive lending session on stdin |
//! | `lend policy` | Loan period per item kind |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - One JSON object per response
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! lend --verbose --today 2024-01-01
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod command;
mod output;
mod session;

pub use app::{Cli, Commands, run};
pub use command::{Action, SessionCommand, MENU};
pub use output::{Output, OutputFormat};
pub use session::Session;
