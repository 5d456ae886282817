//! Modal Component
//!
//! Overlay rendered through a portal into `document.body`.

use leptos::portal::Portal;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    move || {
        open.get().then(|| {
            let children = children.clone();
            view! {
                <Portal>
                    <div class="modal-overlay" on:click=move |_| on_close.run(())>
                        <div class="modal" on:click=|ev| ev.stop_propagation()>
                            {children()}
                            <div class="modal-actions">
                                <button on:click=move |_| on_close.run(())>"Close"</button>
                            </div>
                        </div>
                    </div>
                </Portal>
            }
        })
    }
}
