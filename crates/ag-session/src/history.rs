//! Bounded, newest-first log of finished tasks.

use crate::store::KeyValueStore;
use crate::SessionError;
use ag_core::task::TaskResult;
use std::sync::Arc;
use uuid::Uuid;

pub const HISTORY_KEY: &str = "taskHistory";
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Task results stored as one JSON array under `HISTORY_KEY`.
pub struct TaskHistory {
    store: Arc<dyn KeyValueStore>,
    limit: usize,
}

impl TaskHistory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_limit(store, DEFAULT_HISTORY_LIMIT)
    }

    /// A limit of zero is raised to one.
    pub fn with_limit(store: Arc<dyn KeyValueStore>, limit: usize) -> Self {
        Self {
            store,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Insert at the front and drop whatever falls past the limit.
    pub fn record(&self, result: &TaskResult) -> Result<(), SessionError> {
        let mut entries = self.list()?;
        entries.insert(0, result.clone());
        entries.truncate(self.limit);
        self.write(&entries)?;
        tracing::debug!(id = %result.id, kept = entries.len(), "recorded task");
        Ok(())
    }

    /// All stored results, newest first. An unreadable blob reads as empty.
    pub fn list(&self) -> Result<Vec<TaskResult>, SessionError> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable task history");
                Ok(Vec::new())
            }
        }
    }

    pub fn get(&self, id: Uuid) -> Result<Option<TaskResult>, SessionError> {
        Ok(self.list()?.into_iter().find(|r| r.id == id))
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.remove(HISTORY_KEY)
    }

    pub fn len(&self) -> Result<usize, SessionError> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.list()?.is_empty())
    }

    fn write(&self, entries: &[TaskResult]) -> Result<(), SessionError> {
        let json =
            serde_json::to_string(entries).map_err(|e| SessionError::Serialization(e.to_string()))?;
        self.store.set(HISTORY_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SqliteStore};
    use ag_core::category::TaskCategory;
    use ag_core::task::TaskMode;

    fn result(n: usize) -> TaskResult {
        TaskResult::completed(
            format!("задача {n}"),
            TaskMode::Single,
            TaskCategory::General,
            None,
            format!("ответ {n}"),
        )
    }

    #[test]
    fn newest_first_and_capped() {
        let history = TaskHistory::new(Arc::new(MemoryStore::new()));
        for n in 0..15 {
            history.record(&result(n)).unwrap();
        }
        let entries = history.list().unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].task, "задача 14");
        assert_eq!(entries[9].task, "задача 5");
    }

    #[test]
    fn get_and_clear() {
        let history = TaskHistory::new(Arc::new(SqliteStore::in_memory().unwrap()));
        let first = result(1);
        history.record(&first).unwrap();
        history.record(&result(2)).unwrap();

        assert_eq!(history.get(first.id).unwrap(), Some(first));
        assert_eq!(history.get(Uuid::new_v4()).unwrap(), None);
        assert_eq!(history.len().unwrap(), 2);

        history.clear().unwrap();
        assert!(history.is_empty().unwrap());
    }

    #[test]
    fn custom_limit() {
        let history = TaskHistory::with_limit(Arc::new(MemoryStore::new()), 3);
        for n in 0..5 {
            history.record(&result(n)).unwrap();
        }
        assert_eq!(history.len().unwrap(), 3);
        assert_eq!(TaskHistory::with_limit(Arc::new(MemoryStore::new()), 0).limit(), 1);
    }

    #[test]
    fn corrupt_blob_reads_as_empty() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(HISTORY_KEY, "{not json").unwrap();
        let history = TaskHistory::new(store);
        assert!(history.list().unwrap().is_empty());
        history.record(&result(1)).unwrap();
        assert_eq!(history.len().unwrap(), 1);
    }

    #[test]
    fn results_with_payload_survive_storage() {
        use ag_mock::MockGenerator;
        use chrono::NaiveDate;

        let now = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let payload = MockGenerator::seeded(3, now).generate(TaskCategory::Weather, "погода");
        let stored = TaskResult::completed("погода", TaskMode::Multi, TaskCategory::Weather, payload, "ok");

        let history = TaskHistory::new(Arc::new(SqliteStore::in_memory().unwrap()));
        history.record(&stored).unwrap();
        assert_eq!(history.list().unwrap(), vec![stored]);
    }
}
