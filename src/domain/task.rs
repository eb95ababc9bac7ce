//! Task domain model
//!
//! A task is a single todo entry: a description, a done flag and two
//! timestamps. The persisted field names (`Task`, `Done`, `CreatedAt`,
//! `CompletedAt`) are kept stable so existing `.todo.json` files load as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    /// What needs doing
    #[serde(rename = "Task")]
    pub description: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub done: bool,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was completed (only meaningful when `done`)
    #[serde(default, with = "zero_time")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new pending task stamped with the current time
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Marks the task done.
    ///
    /// Completing an already-done task refreshes `completed_at`.
    pub fn complete(&mut self) {
        self.done = true;
        self.completed_at = Some(Utc::now());
    }

    /// Returns true if the task has not been completed yet
    pub fn is_pending(&self) -> bool {
        !self.done
    }
}

/// Serde adapter for optional timestamps stored with a zero-time sentinel.
///
/// An unset timestamp is written as `0001-01-01T00:00:00Z`. On read, the
/// sentinel (or anything earlier), `null` and a missing field all map to `None`.
pub(crate) mod zero_time {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const ZERO_TIME: &str = "0001-01-01T00:00:00Z";

    /// Unix timestamp of `0001-01-01T00:00:00Z`
    const ZERO_TIMESTAMP: i64 = -62_135_596_800;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => {
                serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_str(ZERO_TIME),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        let time = DateTime::parse_from_rfc3339(&raw)
            .map_err(serde::de::Error::custom)?
            .with_timezone(&Utc);

        if time.timestamp() <= ZERO_TIMESTAMP {
            Ok(None)
        } else {
            Ok(Some(time))
        }
    }
}
