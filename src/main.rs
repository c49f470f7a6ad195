//! Lending Desk - in-memory lending for books and magazines

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = lending_desk::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
