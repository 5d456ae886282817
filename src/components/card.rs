//! Card Component
//!
//! Titled box used by every demo, with optional render-prop footer.

use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(into)] title: String,
    /// Rendered below the body on every reactive update
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <h4>{title}</h4>
            <div>{children()}</div>
            {footer.map(|footer| view! { <div class="card-footer">{footer.run()}</div> })}
        </div>
    }
}
