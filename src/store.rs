//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Counter slice
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CounterState {
    pub value: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

impl CounterState {
    pub fn apply(&mut self, action: CounterAction) {
        match action {
            CounterAction::Increment => self.value += 1,
            CounterAction::Decrement => self.value -= 1,
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub counter: CounterState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Dispatch a counter action against the store
pub fn store_dispatch_counter(store: &AppStore, action: CounterAction) {
    store.counter().write().apply(action);
    log::debug!("counter {:?}", action);
}
