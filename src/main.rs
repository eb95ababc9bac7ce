//! todo - command-line todo list

use std::process::ExitCode;

fn main() -> ExitCode {
    match todo::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
