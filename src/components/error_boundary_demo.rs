//! Error Boundary Demo

use leptos::prelude::*;

use super::Card;

#[derive(Debug, Clone, thiserror::Error)]
#[error("BOOM!")]
struct Kaboom;

#[component]
pub fn ErrorBoundaryDemo() -> impl IntoView {
    let (boom, set_boom) = signal(false);

    let kaboom = move || {
        if boom.get() {
            log::error!("error boundary caught: {}", Kaboom);
            Err(Kaboom)
        } else {
            Ok(view! { <button on:click=move |_| set_boom.set(true)>"Throw error"</button> })
        }
    };

    view! {
        <Card title="Error Boundary">
            <p>"Catches errors produced by its children while rendering."</p>
            <ErrorBoundary fallback=move |_errors| {
                view! {
                    <div class="card-error">
                        <h3>"Something went wrong 😅"</h3>
                        <p>"This is an error boundary in action."</p>
                        <button on:click=move |_| set_boom.set(false)>"Reset"</button>
                    </div>
                }
            }>
                {kaboom}
            </ErrorBoundary>
        </Card>
    }
}
