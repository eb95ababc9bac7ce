//! Task description collection for `--add`

use std::io::{self, BufRead};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Task cannot be blank (line {line})")]
    Blank { line: usize, collected: Vec<String> },

    #[error("Failed to read tasks from standard input")]
    Read {
        collected: Vec<String>,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    /// Tasks read before the failure
    pub fn collected(&self) -> &[String] {
        match self {
            InputError::Blank { collected, .. } | InputError::Read { collected, .. } => collected,
        }
    }
}

/// Collects the descriptions of the tasks to add.
///
/// When `args` is non-empty they are joined with spaces into a single task
/// and taken as-is. Otherwise each line of `reader` is one task, and the
/// first empty line stops collection with [`InputError::Blank`]. Lines of
/// only whitespace are kept as tasks.
pub fn collect_tasks<R: BufRead>(reader: R, args: &[String]) -> Result<Vec<String>, InputError> {
    if !args.is_empty() {
        return Ok(vec![args.join(" ")]);
    }

    let mut tasks = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                return Err(InputError::Read {
                    collected: tasks,
                    source,
                })
            }
        };

        if line.is_empty() {
            return Err(InputError::Blank {
                line: line_num + 1,
                collected: tasks,
            });
        }

        tasks.push(line);
    }

    Ok(tasks)
}
