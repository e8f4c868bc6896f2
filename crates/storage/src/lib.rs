//! Key/value preference store seam
//!
//! The browser's storage object is an external collaborator; the dashboard
//! only needs get/set/remove on string values plus JSON helpers on top. The
//! trait is that contract, and `MemoryStore` is the in-process
//! implementation used by tests and by session-only fallback when the real
//! store is unavailable.

use nasma_metrics_shared::{DashboardError, DashboardResult};
use std::collections::HashMap;

/// String key/value store with whole-value reads and writes.
pub trait PreferenceStore {
    /// Get a string value.
    fn get(&self, key: &str) -> DashboardResult<Option<String>>;

    /// Store a string value.
    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()>;

    /// Remove a value.
    fn remove(&mut self, key: &str) -> DashboardResult<()>;

    /// Get JSON data. A stored value that no longer parses is treated as
    /// absent rather than failing the caller.
    fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> DashboardResult<Option<T>> {
        match self.get(key)? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    log::warn!("discarding unparseable value under {key}: {e}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Store JSON data.
    fn set_json<T: serde::Serialize>(&mut self, key: &str, value: &T) -> DashboardResult<()> {
        let json = serde_json::to_string(value).map_err(|e| DashboardError::Storage {
            message: format!("serialize {key}: {e}"),
        })?;
        self.set(key, &json)
    }

    /// Check if a key exists.
    fn has(&self, key: &str) -> DashboardResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> DashboardResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store that fails every operation. Models storage being disabled or full;
/// features backed by it must degrade to session-only behavior instead of
/// crashing.
#[derive(Debug, Default, Clone)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get(&self, _key: &str) -> DashboardResult<Option<String>> {
        Err(DashboardError::Storage {
            message: "storage disabled".to_string(),
        })
    }

    fn set(&mut self, _key: &str, _value: &str) -> DashboardResult<()> {
        Err(DashboardError::Storage {
            message: "storage disabled".to_string(),
        })
    }

    fn remove(&mut self, _key: &str) -> DashboardResult<()> {
        Err(DashboardError::Storage {
            message: "storage disabled".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Pref {
        theme: String,
        cards: u32,
    }

    #[test]
    fn test_string_round_trip() {
        let mut store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(store.has("theme").unwrap());

        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = MemoryStore::new();
        let pref = Pref {
            theme: "light".to_string(),
            cards: 4,
        };
        store.set_json("prefs", &pref).unwrap();
        let back: Pref = store.get_json("prefs").unwrap().unwrap();
        assert_eq!(back, pref);
    }

    #[test]
    fn test_unparseable_json_treated_as_absent() {
        let mut store = MemoryStore::new();
        store.set("prefs", "{broken").unwrap();
        let back: Option<Pref> = store.get_json("prefs").unwrap();
        assert_eq!(back, None);
    }

    #[test]
    fn test_unavailable_store_errors() {
        let mut store = UnavailableStore;
        assert!(store.get("theme").is_err());
        assert!(store.set("theme", "dark").is_err());
        assert!(store.remove("theme").is_err());
    }
}
