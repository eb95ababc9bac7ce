//! todo - a small command-line todo list
//!
//! Tasks live in an ordered list persisted as a JSON array. The CLI adds
//! tasks from arguments or piped input, marks them done by number, and
//! prints them as a plain-text report.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{ListError, Task, TaskList};
pub use storage::{Config, StoreError, TaskStore};
