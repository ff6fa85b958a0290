//! User preferences: explicit configuration passed to whoever needs it.

use crate::task::TaskMode;
use serde::{Deserialize, Serialize};

const fn default_show_jokes() -> bool {
    true
}

const fn default_history_limit() -> usize {
    10
}

const fn default_simulated_delay_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_show_jokes")]
    pub show_jokes: bool,

    /// Mode preselected for new tasks.
    #[serde(default)]
    pub default_mode: TaskMode,

    /// Number of most recent results kept in history.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Artificial latency before a submitted task resolves.
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_jokes: default_show_jokes(),
            default_mode: TaskMode::default(),
            history_limit: default_history_limit(),
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let prefs = Preferences::default();
        assert!(!prefs.dark_mode);
        assert!(prefs.show_jokes);
        assert_eq!(prefs.default_mode, TaskMode::Single);
        assert_eq!(prefs.history_limit, 10);
        assert_eq!(prefs.simulated_delay_ms, 2000);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"darkMode": true}"#).unwrap();
        assert!(prefs.dark_mode);
        assert!(prefs.show_jokes);
        assert_eq!(prefs.history_limit, 10);
    }
}
