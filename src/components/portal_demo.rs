//! Portal Demo

use leptos::prelude::*;

use super::{Card, Modal};

#[component]
pub fn PortalDemo() -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <Card title="Portals">
            <p>"Renders a modal outside the component's DOM hierarchy."</p>
            <button on:click=move |_| set_open.set(true)>"Open modal"</button>
            <Modal open=open on_close=move |_| set_open.set(false)>
                <h3>"Modal via Portal"</h3>
                <p>"This content is mounted in " <code>"document.body"</code> "."</p>
            </Modal>
        </Card>
    }
}
