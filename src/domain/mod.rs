//! Domain models for the todo list
//!
//! Contains the list logic without any I/O concerns.

mod list;
mod task;

pub use list::{ListError, TaskList};
pub use task::Task;
