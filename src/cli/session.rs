//! Interactive lending session
//!
//! Reads one command per line until `exit` or end of input. Failed
//! commands are reported and the session carries on.

use std::io::BufRead;

use anyhow::{Context, Result};
use serde_json::json;

use super::command::{Action, SessionCommand, MENU};
use super::output::Output;
use crate::desk::{Clock, Desk, Response};

/// A session driving one desk from line-oriented input
pub struct Session<'a, C> {
    desk: Desk<C>,
    output: &'a Output,
    prompt: Option<String>,
}

impl<'a, C: Clock> Session<'a, C> {
    /// Creates a session; `prompt` is printed before each line when set
    pub fn new(desk: Desk<C>, output: &'a Output, prompt: Option<String>) -> Self {
        Self {
            desk,
            output,
            prompt,
        }
    }

    /// Prints the command menu (text only)
    pub fn banner(&self) {
        self.output.line("Library Management System");
        self.output.line(MENU);
    }

    /// Processes input until `exit` or end of input
    ///
    /// A line that is not valid UTF-8 is reported and skipped.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            if let Some(prompt) = &self.prompt {
                self.output.prompt(prompt);
            }

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read command")?;
            if read == 0 {
                self.output.verbose_ctx("session", "End of input");
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(_) => {
                    self.output.error("Input line is not valid UTF-8; skipped");
                    continue;
                }
            };

            if !self.execute(line) {
                break;
            }
        }

        Ok(())
    }

    /// Executes one line; returns false when the session should end
    pub fn execute(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return true;
        }

        self.output.verbose_ctx("session", &format!("Command: {}", line));

        let command = match SessionCommand::parse_line(line) {
            Ok(command) => command,
            Err(message) => {
                self.output.error(&message);
                return true;
            }
        };

        match command.into_action() {
            Action::Exit => {
                self.output.verbose_ctx("session", "Exit requested");
                return false;
            }
            Action::Help => self.help(),
            Action::Request(request) => {
                self.output
                    .verbose_ctx("desk", &format!("Request: {:?}", request));
                match self.desk.handle(request) {
                    Ok(response) => self.render(&response),
                    Err(e) => self.output.error(&e.to_string()),
                }
            }
        }

        true
    }

    fn help(&self) {
        if self.output.is_json() {
            self.output.data(&json!({ "result": "help", "menu": MENU }));
        } else {
            self.output.line(MENU);
        }
    }

    fn render(&self, response: &Response) {
        if self.output.is_json() {
            self.output.data(response);
            return;
        }

        match response {
            Response::Added { item } => {
                self.output
                    .line(&format!("{} added successfully.", item.kind.label()));
            }
            Response::Removed { item: Some(item) } => {
                self.output
                    .line(&format!("Item removed: {}", item.description));
            }
            Response::Removed { item: None } => {
                self.output.line("No matching item; nothing removed.");
            }
            Response::Listing { items } if items.is_empty() => {
                self.output.line("No items in the library.");
            }
            Response::Listing { items } => {
                for item in items {
                    self.output.line(&item.description);
                }
            }
            Response::Found { item } => self.output.line(&item.description),
            Response::Borrowed { due_date, .. } => {
                self.output.line(&format!(
                    "Item borrowed successfully. Due Date: {}",
                    due_date
                ));
            }
            Response::Returned { .. } => self.output.line("Item returned successfully."),
        }
    }
}
