//! Props Demo

use leptos::prelude::*;

use super::Card;

#[component]
pub fn PropsDemo(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <Card title="Props">
            <p>
                "Props are a component's input. Here " <code>"title"</code> " = \"" {title}
                "\" and the " <code>"children"</code> " are shown below."
            </p>
            <div class="inline-box">{children()}</div>
        </Card>
    }
}
