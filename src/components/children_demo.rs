//! Children & Render Props Demo

use std::time::Duration;

use chrono::Local;
use leptos::prelude::*;

use super::Card;

#[component]
pub fn ChildrenDemo() -> impl IntoView {
    let (now, set_now) = signal(Local::now());

    match set_interval_with_handle(move || set_now.set(Local::now()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("clock interval not started: {:?}", e),
    }

    view! {
        <Card
            title="Children & Render Props"
            footer=move || view! { <em>"Now: " {now.get().format("%H:%M:%S").to_string()}</em> }
        >
            <p>
                <code>"children"</code> " and render props make composition flexible."
            </p>
        </Card>
    }
}
