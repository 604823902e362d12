//! Local persistence of the upload history.
//!
//! The history is stored as one JSON array under [`HISTORY_KEY`] and
//! rewritten in full on every change. Unreadable data is treated as an
//! empty history.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::HISTORY_KEY;
use crate::types::{AppError, AppResult, UploadResult};

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

// =============================================================================
// Browser localStorage
// =============================================================================

/// `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the origin's localStorage.
    pub fn open() -> AppResult<Self> {
        let window = web_sys::window().ok_or_else(|| AppError::Storage("no global window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Volatile store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// Browser store with fallback
// =============================================================================

/// localStorage when available, memory otherwise (e.g. storage disabled
/// by the browser). History then lasts only for the page's lifetime.
pub enum BrowserStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStorage::open() {
            Ok(local) => BrowserStore::Local(local),
            Err(e) => {
                log::warn!("⚠️ {} - history will not survive a reload", e);
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(s) => s.get(key),
            BrowserStore::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            BrowserStore::Local(s) => s.set(key, value),
            BrowserStore::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            BrowserStore::Local(s) => s.remove(key),
            BrowserStore::Memory(s) => s.remove(key),
        }
    }
}

// =============================================================================
// History store
// =============================================================================

/// Upload history persisted under a single key.
pub struct HistoryStore<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// History under the default [`HISTORY_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    pub fn with_key(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Read the stored history, newest first.
    ///
    /// Missing or corrupted data yields an empty list.
    pub fn load(&self) -> Vec<UploadResult> {
        let Some(raw) = self.store.get(self.key) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<UploadResult>>(&raw) {
            Ok(history) => {
                log::debug!("📂 Loaded {} history entries", history.len());
                history
            }
            Err(e) => {
                log::warn!("⚠️ Discarding unreadable history under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Replace the stored history.
    pub fn save(&self, history: &[UploadResult]) -> AppResult<()> {
        let json = serde_json::to_string(history).map_err(|e| AppError::Storage(e.to_string()))?;
        self.store.set(self.key, &json)
    }

    /// Delete the stored history.
    pub fn clear(&self) -> AppResult<()> {
        self.store.remove(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size: u64, timestamp: i64) -> UploadResult {
        UploadResult {
            url: format!("https://cdn/x/{}", name),
            name: name.to_string(),
            size,
            timestamp,
        }
    }

    #[test]
    fn test_load_empty_store() {
        let history = HistoryStore::new(MemoryStore::new());
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let history = HistoryStore::new(MemoryStore::new());
        let items = vec![
            entry("b.jpg", 2_097_152, 20),
            entry("a.png", 1_048_576, 10),
            entry("a.png", 1_048_576, 5),
        ];

        history.save(&items).unwrap();
        assert_eq!(history.load(), items);
    }

    #[test]
    fn test_corrupted_data_loads_as_empty() {
        for raw in ["{not json", "{\"url\":\"x\"}", "[{\"url\":\"x\"}]", ""] {
            let history = HistoryStore::new(MemoryStore::with_entry(HISTORY_KEY, raw));
            assert!(history.load().is_empty(), "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_clear_removes_key() {
        let store = MemoryStore::new();
        let history = HistoryStore::new(store.clone());
        history.save(&[entry("a.png", 1, 1)]).unwrap();
        assert!(store.get(HISTORY_KEY).is_some());

        history.clear().unwrap();
        assert!(store.get(HISTORY_KEY).is_none());
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_legacy_keys_are_ignored() {
        let legacy = serde_json::to_string(&vec![entry("old.png", 1, 1)]).unwrap();
        let history = HistoryStore::new(MemoryStore::with_entry("cs_history_v4", &legacy));
        assert!(history.load().is_empty());
    }
}
