//! Application state shared across command handlers.

use ag_session::{KeyValueStore, PreferenceStore, SqliteStore, TaskHistory};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DB_FILE: &str = "agentdemo.db";

pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub prefs: PreferenceStore,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Open `<data_dir>/agentdemo.db`, creating the directory if needed.
    pub fn open(data_dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;
        let path = data_dir.join(DB_FILE);
        let store: Arc<dyn KeyValueStore> = Arc::new(
            SqliteStore::open(&path)
                .with_context(|| format!("failed to open session store {}", path.display()))?,
        );
        Ok(Self {
            prefs: PreferenceStore::new(store.clone()),
            store,
            data_dir: data_dir.to_path_buf(),
        })
    }

    /// History sized by the stored `historyLimit`.
    pub fn history(&self) -> anyhow::Result<TaskHistory> {
        let limit = self.prefs.load()?.history_limit;
        Ok(TaskHistory::with_limit(self.store.clone(), limit))
    }
}

/// `--data-dir`, else the platform data directory, else the working directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| dirs::data_dir().map(|p| p.join("agentdemo")))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = Path::new("/tmp/somewhere");
        assert_eq!(resolve_data_dir(Some(dir)), dir.to_path_buf());
    }

    #[test]
    fn open_creates_database() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested");
        let state = AppState::open(&dir).unwrap();
        assert!(dir.join(DB_FILE).exists());
        assert_eq!(state.history().unwrap().limit(), 10);
    }
}
