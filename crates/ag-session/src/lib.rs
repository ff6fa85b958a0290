//! ag-session: everything that outlives a single task.
//!
//! A `KeyValueStore` (SQLite on disk, or in memory) backs the user's
//! `Preferences` and the bounded `TaskHistory`. `TaskRunner` drives the
//! classify → generate → summarize pipeline with staged progress updates.

pub mod history;
pub mod prefs;
pub mod runner;
pub mod store;

pub use history::TaskHistory;
pub use prefs::PreferenceStore;
pub use runner::{StatusUpdate, TaskRunner};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("database error: {0}")]
    Database(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("lock poisoned: {0}")]
    Lock(String),
    #[error("unknown preference: {0}")]
    UnknownPreference(String),
    #[error("invalid value for {key}: {value}")]
    InvalidPreference { key: String, value: String },
}
