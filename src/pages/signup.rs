//! Signup Page
//!
//! Form checked with `validator` before submitting.

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::forms::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let errors = RwSignal::new(BTreeMap::<String, String>::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm { name: name.get(), email: email.get() };
        let found = form.field_errors();
        if found.is_empty() {
            let json = serde_json::to_string_pretty(&form).unwrap_or_default();
            let _ = window().alert_with_message(&json);
        } else {
            log::debug!("signup rejected: {:?}", found.keys().collect::<Vec<_>>());
        }
        errors.set(found);
    };

    let error_for = move |field: &'static str| {
        move || errors.with(|e| e.get(field).cloned()).map(|msg| view! { <div class="error">{msg}</div> })
    };

    view! {
        <div class="page-body">
            <h2>"Form (validator)"</h2>
            <form on:submit=on_submit>
                <div class="field">
                    <label>"Name"</label>
                    <br />
                    <input prop:value=name on:input=move |ev| set_name.set(event_target_value(&ev)) />
                    {error_for("name")}
                </div>
                <div class="field">
                    <label>"Email"</label>
                    <br />
                    <input prop:value=email on:input=move |ev| set_email.set(event_target_value(&ev)) />
                    {error_for("email")}
                </div>
                <button type="submit">"Submit"</button>
            </form>
        </div>
    }
}
