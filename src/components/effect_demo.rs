//! Effect Demo
//!
//! Fetches a few users on mount and aborts the request on unmount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use super::Card;
use crate::api::{self, FetchError, User};
use crate::config::EFFECT_DEMO_USERS;

#[component]
pub fn EffectDemo() -> impl IntoView {
    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let controller = StoredValue::new_local(AbortController::new().ok());
    on_cleanup(move || {
        controller.try_with_value(|c| {
            if let Some(c) = c {
                c.abort();
            }
        });
    });

    Effect::new(move |_| {
        set_loading.set(true);
        set_error.set(None);
        let signal = controller.with_value(|c| c.as_ref().map(|c| c.signal()));
        spawn_local(async move {
            match api::list_users(signal.as_ref()).await {
                Ok(list) => {
                    set_users.try_set(list.into_iter().take(EFFECT_DEMO_USERS).collect());
                }
                Err(FetchError::Aborted) => log::debug!("user fetch aborted"),
                Err(e) => {
                    log::warn!("user fetch failed: {}", e);
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    });

    view! {
        <Card title="Effects (Effect::new)">
            <p>"Data fetching with cleanup through an AbortController."</p>
            <Show when=move || loading.get()>
                <p>"Loading..."</p>
            </Show>
            {move || error.get().map(|e| view! { <p class="error">"Error: " {e}</p> })}
            <ul>
                <For each=move || users.get() key=|u| u.id let:user>
                    <li>{user.name}</li>
                </For>
            </ul>
        </Card>
    }
}
