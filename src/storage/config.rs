//! Configuration handling for the todo CLI
//!
//! The only setting is where the task file lives. It defaults to
//! `.todo.json` in the working directory and can be overridden through the
//! `TODO_FILENAME` environment variable or the `--file` flag.

use std::ffi::OsString;
use std::path::PathBuf;

use super::TaskStore;

/// Default task file, relative to the working directory
pub const DEFAULT_FILENAME: &str = ".todo.json";

/// Environment variable overriding [`DEFAULT_FILENAME`]
pub const FILENAME_ENV: &str = "TODO_FILENAME";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the task file
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILENAME),
        }
    }
}

impl Config {
    /// Resolves the configuration from the process environment
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var_os(key))
    }

    /// Resolves the configuration using `lookup` for environment variables.
    ///
    /// An empty value counts as unset.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        match lookup(FILENAME_ENV).filter(|value| !value.is_empty()) {
            Some(path) => Self { path: path.into() },
            None => Self::default(),
        }
    }

    /// Replaces the path when an explicit one was given
    pub fn with_path_override(self, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self { path },
            None => self,
        }
    }

    /// Opens the task store this configuration points at
    pub fn task_store(&self) -> TaskStore {
        TaskStore::new(&self.path)
    }
}
