//! # Storage Layer
//!
//! Persistence for the task list.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | JSON array | `.todo.json` (or `$TODO_FILENAME`) |
//!
//! ## Concurrency
//!
//! None. Each invocation loads the file, changes it in memory and writes it
//! back whole; concurrent invocations can lose updates.
//!
//! ## Key Types
//!
//! - [`TaskStore`] - Read/write the task list as JSON
//! - [`Config`] - Where the task file lives

mod config;
mod json;

pub use config::{Config, DEFAULT_FILENAME, FILENAME_ENV};
pub use json::{StoreError, TaskStore};
