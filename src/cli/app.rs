//! Main CLI application structure

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use super::input::collect_tasks;
use super::output::{Output, OutputFormat};
use crate::domain::{Task, TaskList};
use crate::storage::Config;

const ADD_HELP: &str = "\
New tasks can be added with --add by either:
  1. following the flag with the task text, or
  2. piping the task(s) in on standard input, one task per line.

The task file defaults to .todo.json in the current directory and can be
changed with the TODO_FILENAME environment variable or --file.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Invalid option")]
    InvalidOption,
}

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version, about = "Manage a todo list stored in a JSON file")]
#[command(after_help = ADD_HELP)]
pub struct Cli {
    /// Add task to the todo list
    #[arg(long)]
    pub add: bool,

    /// List all tasks
    #[arg(long)]
    pub list: bool,

    /// List pending tasks only
    #[arg(long)]
    pub list_pending: bool,

    /// Item to be completed
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub complete: Option<i64>,

    /// Show timestamps in listings
    #[arg(long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Print diagnostic messages to stderr
    #[arg(long)]
    pub debug: bool,

    /// Task file to use instead of $TODO_FILENAME or .todo.json
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Task text for --add (reads standard input when omitted)
    #[arg(value_name = "TASK")]
    pub task: Vec<String>,
}

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List { pending_only: bool },
    Complete(i64),
    Add,
}

impl Cli {
    /// Picks the action from the flags: listing wins over completing,
    /// completing wins over adding.
    pub fn action(&self) -> Result<Action, CliError> {
        if self.list || self.list_pending {
            Ok(Action::List {
                pending_only: self.list_pending,
            })
        } else if let Some(index) = self.complete {
            Ok(Action::Complete(index))
        } else if self.add {
            Ok(Action::Add)
        } else {
            Err(CliError::InvalidOption)
        }
    }
}

/// A task as shown by `--format json`
#[derive(Serialize)]
struct TaskView<'a> {
    index: usize,
    task: &'a str,
    done: bool,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> TaskView<'a> {
    fn new(index: usize, task: &'a Task) -> Self {
        Self {
            index,
            task: &task.description,
            done: task.done,
            created_at: task.created_at,
            completed_at: task.completed_at,
        }
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.debug);
    let config = Config::from_env().with_path_override(cli.file.clone());

    output.debug("todo starting");
    execute(&cli, &config, &output, io::stdin().lock())?;
    output.debug("Command completed successfully");
    Ok(())
}

/// Runs one parsed invocation against `config`, reading piped tasks from `input`
pub fn execute<R: BufRead>(cli: &Cli, config: &Config, output: &Output, input: R) -> Result<()> {
    let action = cli.action()?;
    output.debug_ctx("config", &format!("Task file: {}", config.path.display()));

    let store = config.task_store();
    let mut tasks = store.load()?;
    output.debug_ctx("load", &format!("Loaded {} task(s)", tasks.len()));

    match action {
        Action::List { pending_only } => {
            list_tasks(output, &tasks, pending_only, cli.verbose)?;
            return Ok(());
        }

        Action::Complete(index) => {
            tasks.complete(index)?;
            output.debug_ctx("complete", &format!("Marked item {} done", index));
            store.save(&tasks)?;
            output.confirm(&format!("Completed item {}", index))?;
        }

        Action::Add => {
            let new_tasks = collect_tasks(input, &cli.task).context("No tasks were added")?;
            for description in new_tasks {
                let index = tasks.add(description);
                output.debug_ctx("add", &format!("Added item {}", index));
            }
            store.save(&tasks)?;
            output.confirm(&format!("Task list has {} item(s)", tasks.len()))?;
        }
    }

    output.debug_ctx("save", &format!("Saved {} task(s)", tasks.len()));
    Ok(())
}

fn list_tasks(output: &Output, tasks: &TaskList, pending_only: bool, verbose: bool) -> Result<()> {
    let written = if output.is_json() {
        let views: Vec<_> = tasks
            .visible(pending_only)
            .map(|(index, task)| TaskView::new(index, task))
            .collect();
        output.data(&views)
    } else {
        output.report(&tasks.report(pending_only, verbose))
    };

    written.context("Failed to write to standard output")
}
