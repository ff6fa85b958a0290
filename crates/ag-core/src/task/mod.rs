//! Task records: execution mode, status, and the immutable result of one submitted task.

use crate::category::TaskCategory;
use crate::payload::TaskPayload;
use crate::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Execution mode
// ---------------------------------------------------------------------------

/// How many agents the caller asked for. Only changes narrative phrasing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskMode {
    #[default]
    Single,
    Multi,
    Auto,
}

impl TaskMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskMode::Single => "single",
            TaskMode::Multi => "multi",
            TaskMode::Auto => "auto",
        }
    }
}

impl fmt::Display for TaskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(TaskMode::Single),
            "multi" => Ok(TaskMode::Multi),
            "auto" => Ok(TaskMode::Auto),
            _ => Err(CoreError::UnknownMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Task status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Completed,
    Failed,
}

// ---------------------------------------------------------------------------
// TaskResult: one row per submitted task
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskResult {
    /// Unique result identifier.
    pub id: Uuid,

    /// The task text exactly as submitted.
    pub task: String,

    pub mode: TaskMode,

    pub category: TaskCategory,

    /// Structured data, absent for categories without a generator.
    #[serde(default)]
    pub payload: Option<TaskPayload>,

    /// Natural-language answer.
    pub summary: String,

    pub timestamp: DateTime<Utc>,

    pub status: TaskStatus,
}

impl TaskResult {
    /// Build a completed result stamped with a fresh id and the current time.
    pub fn completed(
        task: impl Into<String>,
        mode: TaskMode,
        category: TaskCategory,
        payload: Option<TaskPayload>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            task: task.into(),
            mode,
            category,
            payload,
            summary: summary.into(),
            timestamp: Utc::now(),
            status: TaskStatus::Completed,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Multi".parse::<TaskMode>().unwrap(), TaskMode::Multi);
        assert_eq!(" auto ".parse::<TaskMode>().unwrap(), TaskMode::Auto);
        assert!(matches!(
            "swarm".parse::<TaskMode>(),
            Err(CoreError::UnknownMode(_))
        ));
    }

    #[test]
    fn round_trip_task_result() {
        let result = TaskResult::completed(
            "напиши функцию сортировки",
            TaskMode::Single,
            TaskCategory::Coding,
            None,
            "Задача разработки завершена.",
        );

        let json = serde_json::to_string(&result).unwrap();
        let back: TaskResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, result.id);
        assert_eq!(back.category, TaskCategory::Coding);
        assert_eq!(back.status, TaskStatus::Completed);
        assert!(back.payload.is_none());
    }
}
