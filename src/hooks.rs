//! Reactive Hooks
//!
//! Leptos wrappers around the plain persistence type.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::{BrowserStorage, KeyValueStore, PersistedValue};

/// Signal pair backed by `store` under `key`.
///
/// Hydrates once from the store. Every later change to the signal is
/// written through; the initial value is not.
pub fn use_persisted<T, S>(store: S, key: &'static str, default: T) -> (ReadSignal<T>, WriteSignal<T>)
where
    T: Serialize + DeserializeOwned + PartialEq + Clone + Send + Sync + 'static,
    S: KeyValueStore + 'static,
{
    let cell = PersistedValue::initialize(store, key, default);
    log::debug!("hydrated `{}`", cell.key());
    let (value, set_value) = signal(cell.get().clone());
    let cell = StoredValue::new_local(cell);

    Effect::new(move |hydrated: Option<()>| {
        let next = value.get();
        if hydrated.is_some() {
            cell.update_value(|c| {
                c.set(next);
            });
        }
    });

    (value, set_value)
}

/// `use_persisted` over `window.localStorage`
pub fn use_local_storage<T>(key: &'static str, default: T) -> (ReadSignal<T>, WriteSignal<T>)
where
    T: Serialize + DeserializeOwned + PartialEq + Clone + Send + Sync + 'static,
{
    use_persisted(BrowserStorage, key, default)
}
