//! Persistent Values
//!
//! Key-scoped values hydrated once from a key-value store and written
//! back on every change. Persistence is best effort: any store or
//! decode failure degrades to plain in-memory behavior.

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("entry `{key}` could not be decoded: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("value for `{key}` could not be encoded: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw string key-value medium
pub trait KeyValueStore {
    /// Serialized entry for `key`, `Ok(None)` when absent
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn write(&self, key: &str, serialized: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, serialized: &str) -> Result<(), StoreError> {
        (**self).write(key, serialized)
    }
}

// ========================
// Stores
// ========================

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn write(&self, key: &str, serialized: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, serialized)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::{KeyValueStore, StoreError};

    /// In-memory store, cheap to clone (clones share data)
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<Cell<usize>>,
        failing: Rc<Cell<bool>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Put a raw entry, bypassing encoding and the write counter
        pub fn insert_raw(&self, key: &str, raw: &str) {
            self.entries.borrow_mut().insert(key.to_string(), raw.to_string());
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        /// Successful writes so far
        pub fn write_count(&self) -> usize {
            self.writes.get()
        }

        /// Make every read and write fail with `Unavailable`
        pub fn set_failing(&self, failing: bool) {
            self.failing.set(failing);
        }
    }

    impl KeyValueStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.failing.get() {
                return Err(StoreError::Unavailable("memory store offline".into()));
            }
            Ok(self.raw(key))
        }

        fn write(&self, key: &str, serialized: &str) -> Result<(), StoreError> {
            if self.failing.get() {
                return Err(StoreError::Unavailable("memory store offline".into()));
            }
            self.insert_raw(key, serialized);
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }
}

// ========================
// Encoding
// ========================

/// Read and decode `key`. Absent entries are `Ok(None)`.
pub fn load<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StoreError> {
    match store.read(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode { key: key.to_string(), source }),
        None => Ok(None),
    }
}

pub fn save<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)
        .map_err(|source| StoreError::Encode { key: key.to_string(), source })?;
    store.write(key, &raw)
}

// ========================
// PersistedValue
// ========================

/// A single named value kept in sync with a store
#[derive(Debug, Clone)]
pub struct PersistedValue<T, S> {
    key: String,
    value: T,
    store: S,
    /// Last write-through failed, so the store may hold an older value
    dirty: bool,
}

impl<T, S> PersistedValue<T, S>
where
    T: Serialize + DeserializeOwned + PartialEq,
    S: KeyValueStore,
{
    /// Hydrate from the store, falling back to `default` on absence or failure.
    /// Nothing is written here.
    pub fn initialize(store: S, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = match load(&store, &key) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                log::debug!("no stored entry for `{}`, using default", key);
                default
            }
            Err(e) => {
                log::warn!("{}; using default", e);
                default
            }
        };
        Self { key, value, store, dirty: false }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and write it through when it changed, or when
    /// an earlier write failed. Returns whether a write reached the store.
    pub fn set(&mut self, value: T) -> bool {
        if value == self.value && !self.dirty {
            return false;
        }
        self.value = value;
        self.persist()
    }

    fn persist(&mut self) -> bool {
        match save(&self.store, &self.key, &self.value) {
            Ok(()) => {
                self.dirty = false;
                true
            }
            Err(e) => {
                log::warn!("{}; keeping value in memory only", e);
                self.dirty = true;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        theme: String,
        font_size: u8,
    }

    #[test]
    fn test_fresh_key_returns_default() {
        let store = MemoryStore::new();
        let value = PersistedValue::initialize(store.clone(), "theme", "light".to_string());
        assert_eq!(value.get(), "light");
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.raw("theme"), None);
    }

    #[test]
    fn test_set_then_initialize_round_trips() {
        let store = MemoryStore::new();
        let prefs = Prefs { theme: "dark".into(), font_size: 14 };

        let mut value = PersistedValue::initialize(&store, "prefs", Prefs { theme: "light".into(), font_size: 12 });
        assert!(value.set(prefs.clone()));

        let other_default = Prefs { theme: "sepia".into(), font_size: 99 };
        let reloaded = PersistedValue::initialize(&store, "prefs", other_default);
        assert_eq!(reloaded.get(), &prefs);
    }

    #[test]
    fn test_corrupt_entry_falls_back_to_default() {
        let store = MemoryStore::new();
        store.insert_raw("count", "{not json");
        let value = PersistedValue::initialize(&store, "count", 7i32);
        assert_eq!(*value.get(), 7);
    }

    #[test]
    fn test_wrong_shape_falls_back_to_default() {
        let store = MemoryStore::new();
        store.insert_raw("count", "\"seven\"");
        let value = PersistedValue::initialize(&store, "count", 7i32);
        assert_eq!(*value.get(), 7);
        assert!(matches!(load::<i32>(&store, "count"), Err(StoreError::Decode { .. })));
    }

    #[test]
    fn test_each_change_writes_once() {
        let store = MemoryStore::new();
        let mut value = PersistedValue::initialize(&store, "n", 0u32);

        value.set(1);
        value.set(2);
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.raw("n").as_deref(), Some("2"));

        // same content: no write
        assert!(!value.set(2));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_unavailable_store_keeps_memory_value() {
        let store = MemoryStore::new();
        store.insert_raw("theme", "\"dark\"");
        store.set_failing(true);

        let mut value = PersistedValue::initialize(&store, "theme", "light".to_string());
        assert_eq!(value.get(), "light");

        assert!(!value.set("dark".to_string()));
        assert_eq!(value.get(), "dark");
        assert_eq!(store.write_count(), 0);

        store.set_failing(false);
        assert!(value.set("light".to_string()));
        assert_eq!(store.raw("theme").as_deref(), Some("\"light\""));
    }

    #[test]
    fn test_failed_write_is_retried_on_equal_set() {
        let store = MemoryStore::new();
        let mut value = PersistedValue::initialize(&store, "n", 0u32);

        store.set_failing(true);
        assert!(!value.set(5));
        assert_eq!(store.raw("n"), None);

        store.set_failing(false);
        assert!(value.set(5));
        assert_eq!(store.raw("n").as_deref(), Some("5"));
        assert_eq!(store.write_count(), 1);

        // store is current again: equal set is a no-op
        assert!(!value.set(5));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_load_absent_is_none() {
        let store = MemoryStore::new();
        assert!(matches!(load::<bool>(&store, "missing"), Ok(None)));
    }
}
