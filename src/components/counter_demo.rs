//! Global Store Demo

use leptos::prelude::*;

use super::Card;
use crate::store::{store_dispatch_counter, use_app_store, AppStateStoreFields, CounterAction, CounterStateStoreFields};

#[component]
pub fn CounterDemo() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Card title="Global store">
            <div class="row">
                <button on:click=move |_| store_dispatch_counter(&store, CounterAction::Decrement)>"-"</button>
                <span class="counter">{move || store.counter().value().get()}</span>
                <button on:click=move |_| store_dispatch_counter(&store, CounterAction::Increment)>"+"</button>
            </div>
        </Card>
    }
}
