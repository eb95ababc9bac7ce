//! # Command-Line Interface
//!
//! Flag parsing, input collection and output formatting.
//!
//! ## Actions
//!
//! | Flag | Effect |
//! |------|--------|
//! | `--add [TASK...]` | Add one task from the arguments, or one per stdin line |
//! | `--list` | Print all tasks |
//! | `--list-pending` | Print tasks that are not done |
//! | `--complete N` | Mark task N done |
//!
//! `--verbose` adds timestamps to listings. `--format json` switches to
//! machine-readable output and `--debug` traces each step on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the selected action.

mod app;
mod input;
mod output;

pub use app::{execute, run, Action, Cli, CliError};
pub use input::{collect_tasks, InputError};
pub use output::{Output, OutputFormat};
