use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::booking::{accept_photo, Selection};

#[component]
pub fn PhotoField(selection: RwSignal<Selection>, error: RwSignal<Option<String>>) -> impl IntoView {
    let on_change = move |ev| {
        let input = event_target::<HtmlInputElement>(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        match picked {
            None => {
                selection.update(|s| s.photo = None);
                error.set(None);
            }
            Some(file) => match accept_photo(&file.name(), &file.type_()) {
                Ok(photo) => {
                    error.set(None);
                    selection.update(|s| s.photo = Some(photo));
                }
                // A rejected pick also drops whatever was accepted before.
                Err(e) => {
                    selection.update(|s| s.photo = None);
                    error.set(Some(e.to_string()));
                }
            },
        }
    };

    view! {
        <label class="form-field">
            <span class="form-label">"Photo"</span>
            <input type="file" accept="application/pdf,image/*" on:change=on_change/>
            {move || {
                selection.with(|s| {
                    s.photo
                        .as_ref()
                        .map(|p| view! { <p class="photo-name">{p.name.clone()}</p> })
                })
            }}
            {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </label>
    }
}
