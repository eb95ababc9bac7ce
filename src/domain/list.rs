//! Ordered task list
//!
//! Tasks keep insertion order. Positions are 0-based internally and
//! 1-based everywhere a user sees them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::task::Task;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("Item {index} does not exist (list has {len} items)")]
    OutOfRange { index: i64, len: usize },
}

/// The ordered collection of tasks, persisted as a single JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a new pending task and returns its 1-based index
    pub fn add(&mut self, description: impl Into<String>) -> usize {
        self.0.push(Task::new(description));
        self.0.len()
    }

    /// Marks the task at the 1-based `index` as done.
    ///
    /// Leaves the list untouched when the index is out of range.
    pub fn complete(&mut self, index: i64) -> Result<&Task, ListError> {
        let len = self.0.len();
        let task = index
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.0.get_mut(i))
            .ok_or(ListError::OutOfRange { index, len })?;

        task.complete();
        Ok(task)
    }

    /// Returns the task at the 1-based `index`
    pub fn get(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|i| self.0.get(i))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.0.iter()
    }

    /// Iterates tasks with their 1-based display index.
    ///
    /// With `pending_only`, done tasks are skipped but the remaining
    /// indices still refer to positions in the full list.
    pub fn visible(&self, pending_only: bool) -> impl Iterator<Item = (usize, &Task)> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, task)| (i + 1, task))
            .filter(move |(_, task)| !(pending_only && task.done))
    }

    /// Renders the list for the terminal, one line per task
    pub fn report(&self, pending_only: bool, verbose: bool) -> String {
        let mut formatted = String::new();

        for (index, task) in self.visible(pending_only) {
            let prefix = if task.done { "X " } else { "  " };
            formatted.push_str(&format!("{}{}: {}\n", prefix, index, task.description));

            if verbose {
                formatted.push_str(&format!("\tCreated:\t{}\n", format_time(&task.created_at)));
                if task.done {
                    let completed = task
                        .completed_at
                        .as_ref()
                        .map(format_time)
                        .unwrap_or_else(|| "-".to_string());
                    formatted.push_str(&format!("\tCompleted:\t{}\n", completed));
                }
            }
        }

        formatted
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

fn format_time(time: &chrono::DateTime<chrono::Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}
