//! Query Cache
//!
//! Keyed cache of fetched JSON values with a stale time. Fresh entries
//! are served without refetching.

use std::collections::HashMap;
use std::future::Future;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    fetched_at: f64,
}

/// Time values are milliseconds from any monotonic-enough clock
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: Value, now: f64) {
        self.entries.insert(key.to_string(), CacheEntry { value, fetched_at: now });
    }

    /// Value for `key` if it was fetched less than `stale_ms` ago
    pub fn get_fresh(&self, key: &str, now: f64, stale_ms: f64) -> Option<&Value> {
        self.entries
            .get(key)
            .filter(|e| now - e.fetched_at < stale_ms)
            .map(|e| &e.value)
    }

    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Shared cache provided via context
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self { cache: StoredValue::new(QueryCache::new()) }
    }

    pub fn cached<T: DeserializeOwned>(&self, key: &str, stale_ms: f64) -> Option<T> {
        let now = js_sys::Date::now();
        self.cache
            .with_value(|c| c.get_fresh(key, now, stale_ms).cloned())
            .and_then(|v| serde_json::from_value(v).ok())
    }

    pub fn store<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(v) => {
                let now = js_sys::Date::now();
                self.cache.update_value(|c| c.insert(key, v, now));
            }
            Err(e) => log::warn!("query `{}` not cached: {}", key, e),
        }
    }

    pub fn invalidate(&self, key: &str) {
        self.cache.update_value(|c| c.invalidate(key));
    }
}

pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

/// Resource that serves a fresh cached value or runs `fetcher` and caches
/// its success
pub fn use_query<T, E, F, Fut>(key: &'static str, stale_ms: f64, fetcher: F) -> LocalResource<Result<T, E>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    E: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let client = use_query_client();
    LocalResource::new(move || {
        let cached = client.cached::<T>(key, stale_ms);
        let fut = fetcher();
        async move {
            if let Some(hit) = cached {
                log::debug!("query `{}` served from cache", key);
                return Ok(hit);
            }
            let result = fut.await;
            if let Ok(value) = &result {
                client.store(key, value);
            }
            result
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_within_stale_time() {
        let mut cache = QueryCache::new();
        cache.insert("users", json!([1, 2]), 1_000.0);
        assert_eq!(cache.get_fresh("users", 1_500.0, 60_000.0), Some(&json!([1, 2])));
        assert_eq!(cache.get_fresh("users", 61_000.0, 60_000.0), None);
    }

    #[test]
    fn test_missing_and_invalidated() {
        let mut cache = QueryCache::new();
        assert_eq!(cache.get_fresh("users", 0.0, 10.0), None);
        cache.insert("users", json!("x"), 0.0);
        cache.invalidate("users");
        assert_eq!(cache.get_fresh("users", 0.0, 10.0), None);
    }

    #[test]
    fn test_insert_refreshes_timestamp() {
        let mut cache = QueryCache::new();
        cache.insert("k", json!(1), 0.0);
        cache.insert("k", json!(2), 100.0);
        assert_eq!(cache.get_fresh("k", 150.0, 100.0), Some(&json!(2)));
    }
}
