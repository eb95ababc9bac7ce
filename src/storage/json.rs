//! JSON storage for the task list
//!
//! The whole list is stored as one JSON array and rewritten on every save.
//! There is no locking: two processes saving the same file at once race and
//! the last writer wins.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::TaskList;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access task file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode task file {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode task list")]
    Encode(#[source] serde_json::Error),
}

/// Store for the task list in a single JSON file
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a new task store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the task list.
    ///
    /// A missing or zero-byte file is an empty list.
    pub fn load(&self) -> Result<TaskList, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(TaskList::new()),
            Err(source) => return Err(self.io_error(source)),
        };

        if bytes.is_empty() {
            return Ok(TaskList::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the full task list, replacing the file
    pub fn save(&self, tasks: &TaskList) -> Result<(), StoreError> {
        let json = serde_json::to_vec(tasks).map_err(StoreError::Encode)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // Write to temp file first
        let temp_path = self.temp_path();
        let written = write_file(&temp_path, &json).and_then(|()| fs::rename(&temp_path, &self.path));

        if let Err(source) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(source));
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TaskStore {
        TaskStore::new(dir.path().join(".todo.json"))
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let tasks = store.load().unwrap();
        assert!(tasks.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn load_zero_byte_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"").unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_malformed_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"[{\"Task\": ").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Decode { .. })));
    }

    #[test]
    fn load_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path());

        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut tasks = TaskList::new();
        tasks.add("buy milk");
        tasks.add("write report");
        tasks.complete(2).unwrap();

        store.save(&tasks).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut tasks = TaskList::new();
        tasks.add("one");
        tasks.add("two");
        store.save(&tasks).unwrap();

        let mut fewer = TaskList::new();
        fewer.add("only");
        store.save(&fewer).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(1).unwrap().description, "only");
    }

    #[test]
    fn save_writes_json_array() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut tasks = TaskList::new();
        tasks.add("buy milk");
        store.save(&tasks).unwrap();

        let raw: serde_json::Value = serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
        let entries = raw.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["Task"], "buy milk");
        assert_eq!(entries[0]["Done"], false);
        assert_eq!(entries[0]["CompletedAt"], "0001-01-01T00:00:00Z");
    }

    #[test]
    fn loads_file_written_by_earlier_versions() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"Task":"buy milk","Done":false,"CreatedAt":"2019-08-10T14:03:21.482117-04:00","CompletedAt":"0001-01-01T00:00:00Z"},{"Task":"write report","Done":true,"CreatedAt":"2019-08-10T14:03:30-04:00","CompletedAt":"2019-08-11T09:00:00-04:00"}]"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 2);
        assert!(loaded.get(1).unwrap().completed_at.is_none());
        assert!(loaded.get(2).unwrap().done);
        assert_eq!(loaded.report(false, false), "  1: buy milk\nX 2: write report\n");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("nested").join("dir").join("todo.json"));

        store.save(&TaskList::new()).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&TaskList::new()).unwrap();

        assert!(!store.temp_path().exists());
    }

    #[test]
    fn save_into_directory_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path());

        assert!(matches!(store.save(&TaskList::new()), Err(StoreError::Io { .. })));
    }
}
