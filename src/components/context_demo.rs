//! Context Demo

use leptos::prelude::*;

use super::Card;
use crate::context::use_theme;

#[component]
pub fn ContextDemo() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <Card title="Context">
            <p>"Context hands data (the theme) to a whole subtree without prop drilling."</p>
            <p>"Current theme: " <strong>{move || ctx.theme.get().as_str()}</strong></p>
            <button on:click=move |_| ctx.toggle()>"Toggle theme"</button>
        </Card>
    }
}
