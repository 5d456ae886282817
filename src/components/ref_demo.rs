//! NodeRef Demo

use leptos::html;
use leptos::prelude::*;

use super::Card;

#[component]
pub fn RefDemo() -> impl IntoView {
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let focus = move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <Card title="Refs (NodeRef)">
            <p>"Imperative DOM access without triggering a re-render."</p>
            <input node_ref=input_ref placeholder="Click the button to focus" />
            <button class="spaced" on:click=focus>"Focus"</button>
        </Card>
    }
}
