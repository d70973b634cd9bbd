use leptos::prelude::*;

use crate::booking::email_format_ok;

/// Email input with inline format validation. The error only shows once
/// the field has been touched and holds a non-empty, malformed value; it
/// never blocks the rest of the form.
#[component]
pub fn EmailField(value: RwSignal<String>) -> impl IntoView {
    let touched = RwSignal::new(false);
    let is_invalid = Memo::new(move |_| {
        touched.get() && value.with(|v| !v.is_empty() && !email_format_ok(v))
    });

    view! {
        <label class="form-field">
            <span class="form-label">"Email Address"</span>
            <input
                type="email"
                placeholder="johndoe@email.com"
                prop:value=value
                class=move || {
                    if is_invalid.get() { "text-input invalid" } else { "text-input" }
                }
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| touched.set(true)
            />
            {move || {
                is_invalid.get().then(|| {
                    view! {
                        <p class="field-error">
                            "Please use correct formatting. Example: address@email.com"
                        </p>
                    }
                })
            }}
        </label>
    }
}
