//! Controlled Form Demo

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use super::Card;
use crate::forms::ContactForm;

#[component]
pub fn FormDemo() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let handle = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        form.update(|f| f.set_field(&input.name(), input.value()));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let json = form.with(ContactForm::to_pretty_json);
        log::info!("contact form submitted");
        let _ = window().alert_with_message(&format!("Submitted data: {}", json));
    };

    view! {
        <Card title="Controlled forms">
            <form on:submit=on_submit>
                <div class="row">
                    <label class="lbl">"Name"</label>
                    <input name="name" prop:value=move || form.with(|f| f.name.clone()) on:input=handle />
                </div>
                <div class="row">
                    <label class="lbl">"Email"</label>
                    <input name="email" prop:value=move || form.with(|f| f.email.clone()) on:input=handle />
                </div>
                <button type="submit">"Submit"</button>
            </form>
        </Card>
    }
}
