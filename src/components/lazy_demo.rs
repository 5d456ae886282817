//! Lazy & Suspense Demo

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::Card;
use crate::config::LAZY_DELAY_MS;

/// Panel whose content resolves after an artificial delay
#[component]
fn HeavyPanel() -> impl IntoView {
    let loaded = LocalResource::new(|| async {
        TimeoutFuture::new(LAZY_DELAY_MS).await;
        log::debug!("heavy panel loaded");
    });

    view! {
        <Suspense fallback=|| view! { <p>"Loading component..."</p> }>
            {move || Suspend::new(async move {
                loaded.await;
                view! {
                    <div class="card">
                        <h4>"Dynamic loading (lazy)"</h4>
                        <p>
                            "This panel was loaded on demand and shown through "
                            <code>"Suspense"</code> "."
                        </p>
                    </div>
                }
            })}
        </Suspense>
    }
}

#[component]
pub fn LazyDemo() -> impl IntoView {
    let (show_heavy, set_show_heavy) = signal(false);

    view! {
        <Card title="Lazy & Suspense">
            <p>"Load components on demand."</p>
            <button on:click=move |_| set_show_heavy.update(|s| *s = !*s)>
                {move || if show_heavy.get() { "Hide" } else { "Load" }} " heavy component"
            </button>
            <Show when=move || show_heavy.get()>
                <HeavyPanel />
            </Show>
        </Card>
    }
}
