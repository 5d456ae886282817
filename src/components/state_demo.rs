//! Signal Demo

use leptos::prelude::*;

use super::Card;

#[component]
pub fn StateDemo() -> impl IntoView {
    let (count, set_count) = signal(0i32);

    view! {
        <Card title="State (signal)">
            <p>"Signals make components interactive."</p>
            <div class="row">
                <button on:click=move |_| set_count.update(|c| *c -= 1)>"-"</button>
                <span class="counter">{count}</span>
                <button on:click=move |_| set_count.update(|c| *c += 1)>"+"</button>
            </div>
        </Card>
    }
}
