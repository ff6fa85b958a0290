//! Persistent user preferences, one key per field.

use crate::store::KeyValueStore;
use crate::SessionError;
use ag_core::prefs::Preferences;
use ag_core::task::TaskMode;
use std::str::FromStr;
use std::sync::Arc;

pub const DARK_MODE: &str = "darkMode";
pub const SHOW_JOKES: &str = "showJokes";
pub const DEFAULT_MODE: &str = "defaultMode";
pub const HISTORY_LIMIT: &str = "historyLimit";
pub const SIMULATED_DELAY_MS: &str = "simulatedDelayMs";

pub const KEYS: [&str; 5] = [DARK_MODE, SHOW_JOKES, DEFAULT_MODE, HISTORY_LIMIT, SIMULATED_DELAY_MS];

const MAX_HISTORY_LIMIT: usize = 100;
const MAX_DELAY_MS: u64 = 60_000;

pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current preferences. Missing keys take their default; unreadable
    /// values are logged and replaced by the default.
    pub fn load(&self) -> Result<Preferences, SessionError> {
        let defaults = Preferences::default();
        Ok(Preferences {
            dark_mode: self.read(DARK_MODE, defaults.dark_mode)?,
            show_jokes: self.read(SHOW_JOKES, defaults.show_jokes)?,
            default_mode: self.read(DEFAULT_MODE, defaults.default_mode)?,
            history_limit: self.read(HISTORY_LIMIT, defaults.history_limit)?,
            simulated_delay_ms: self.read(SIMULATED_DELAY_MS, defaults.simulated_delay_ms)?,
        })
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), SessionError> {
        self.store.set(DARK_MODE, &prefs.dark_mode.to_string())?;
        self.store.set(SHOW_JOKES, &prefs.show_jokes.to_string())?;
        self.store.set(DEFAULT_MODE, prefs.default_mode.as_str())?;
        self.store.set(HISTORY_LIMIT, &prefs.history_limit.to_string())?;
        self.store
            .set(SIMULATED_DELAY_MS, &prefs.simulated_delay_ms.to_string())?;
        Ok(())
    }

    /// Flip dark mode and return the new value.
    pub fn toggle_dark_mode(&self) -> Result<bool, SessionError> {
        let value = !self.load()?.dark_mode;
        self.store.set(DARK_MODE, &value.to_string())?;
        Ok(value)
    }

    /// Flip the loading-screen jokes and return the new value.
    pub fn toggle_show_jokes(&self) -> Result<bool, SessionError> {
        let value = !self.load()?.show_jokes;
        self.store.set(SHOW_JOKES, &value.to_string())?;
        Ok(value)
    }

    /// Validate and store a single preference. Accepts camelCase keys and
    /// their snake_case spelling.
    pub fn set(&self, key: &str, value: &str) -> Result<Preferences, SessionError> {
        let key = canonical_key(key).ok_or_else(|| SessionError::UnknownPreference(key.into()))?;
        let invalid = || SessionError::InvalidPreference {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();

        let stored = match key {
            DARK_MODE | SHOW_JOKES => parse_bool(value).ok_or_else(invalid)?.to_string(),
            DEFAULT_MODE => TaskMode::from_str(value)
                .map_err(|_| invalid())?
                .as_str()
                .to_string(),
            HISTORY_LIMIT => match value.parse::<usize>() {
                Ok(n) if (1..=MAX_HISTORY_LIMIT).contains(&n) => n.to_string(),
                _ => return Err(invalid()),
            },
            _ => match value.parse::<u64>() {
                Ok(ms) if ms <= MAX_DELAY_MS => ms.to_string(),
                _ => return Err(invalid()),
            },
        };

        self.store.set(key, &stored)?;
        tracing::info!(key, value = %stored, "preference updated");
        self.load()
    }

    fn read<T: FromStr>(&self, key: &str, default: T) -> Result<T, SessionError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(default);
        };
        match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                tracing::warn!(key, value = %raw, "ignoring unreadable preference");
                Ok(default)
            }
        }
    }
}

fn canonical_key(key: &str) -> Option<&'static str> {
    let folded: String = key.chars().filter(|c| *c != '_' && *c != '-').collect();
    KEYS.into_iter()
        .find(|k| k.eq_ignore_ascii_case(&folded))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SqliteStore};

    fn prefs() -> (Arc<dyn KeyValueStore>, PreferenceStore) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        (store.clone(), PreferenceStore::new(store))
    }

    #[test]
    fn empty_store_yields_defaults() {
        let (_, prefs) = prefs();
        assert_eq!(prefs.load().unwrap(), Preferences::default());
    }

    #[test]
    fn booleans_are_stored_as_text() {
        let (store, prefs) = prefs();
        assert!(prefs.toggle_dark_mode().unwrap());
        assert_eq!(store.get(DARK_MODE).unwrap().as_deref(), Some("true"));
        assert!(!prefs.toggle_show_jokes().unwrap());
        assert_eq!(store.get(SHOW_JOKES).unwrap().as_deref(), Some("false"));
        assert!(!prefs.toggle_dark_mode().unwrap());
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let (store, prefs) = prefs();
        store.set(HISTORY_LIMIT, "lots").unwrap();
        store.set(DEFAULT_MODE, "turbo").unwrap();
        let loaded = prefs.load().unwrap();
        assert_eq!(loaded.history_limit, 10);
        assert_eq!(loaded.default_mode, TaskMode::Single);
    }

    #[test]
    fn set_validates_and_canonicalises() {
        let (store, prefs) = prefs();
        let updated = prefs.set("default_mode", "MULTI").unwrap();
        assert_eq!(updated.default_mode, TaskMode::Multi);
        assert_eq!(store.get(DEFAULT_MODE).unwrap().as_deref(), Some("multi"));

        let updated = prefs.set("darkMode", "on").unwrap();
        assert!(updated.dark_mode);

        let updated = prefs.set("simulated-delay-ms", "0").unwrap();
        assert_eq!(updated.simulated_delay_ms, 0);
    }

    #[test]
    fn set_rejects_bad_input() {
        let (_, prefs) = prefs();
        assert!(matches!(
            prefs.set("fontSize", "12"),
            Err(SessionError::UnknownPreference(_))
        ));
        assert!(matches!(
            prefs.set("historyLimit", "0"),
            Err(SessionError::InvalidPreference { .. })
        ));
        assert!(matches!(
            prefs.set("showJokes", "maybe"),
            Err(SessionError::InvalidPreference { .. })
        ));
        assert!(matches!(
            prefs.set("simulatedDelayMs", "999999"),
            Err(SessionError::InvalidPreference { .. })
        ));
    }

    #[test]
    fn save_then_load_on_sqlite() {
        let prefs = PreferenceStore::new(Arc::new(SqliteStore::in_memory().unwrap()));
        let custom = Preferences {
            dark_mode: true,
            show_jokes: false,
            default_mode: TaskMode::Auto,
            history_limit: 25,
            simulated_delay_ms: 500,
        };
        prefs.save(&custom).unwrap();
        assert_eq!(prefs.load().unwrap(), custom);
    }
}
