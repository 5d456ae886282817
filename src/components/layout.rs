//! Page Layout
//!
//! Themed page shell, sticky header, demo grid and footer.

use leptos::prelude::*;

use crate::config::APP_NAME;
use crate::context::use_theme;

/// Full-height page following the current theme
#[component]
pub fn Page(children: Children) -> impl IntoView {
    let ctx = use_theme();

    // Keep the body in sync so overscroll areas match
    Effect::new(move |_| {
        let theme = ctx.theme.get();
        if let Some(body) = document().body() {
            let style = body.style();
            let _ = style.set_property("background", theme.background());
            let _ = style.set_property("color", theme.foreground());
        }
    });

    view! {
        <div
            class="page"
            style:background=move || ctx.theme.get().background()
            style:color=move || ctx.theme.get().foreground()
        >
            {children()}
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_theme();
    view! {
        <header class="header">
            <h2>{APP_NAME}</h2>
            <div>
                <span class="header-theme">"Theme: " {move || ctx.theme.get().as_str()}</span>
                <button on:click=move |_| ctx.toggle()>"Toggle"</button>
            </div>
        </header>
    }
}

#[component]
pub fn Grid(children: Children) -> impl IntoView {
    view! { <main class="grid">{children()}</main> }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <small>
                "Covered: props, signals, effects, memos, callbacks, node refs, controlled forms, "
                "reducers, context, children and render props, portals, error boundaries, "
                "lazy loading with suspense, a global store and a localStorage hook."
            </small>
        </footer>
    }
}
