use leptos::prelude::*;

use crate::booking::{Selection, TIME_SLOTS};

#[component]
pub fn TimeSlots(selection: RwSignal<Selection>) -> impl IntoView {
    view! {
        <div class="time-slots">
            {TIME_SLOTS
                .iter()
                .map(|slot| {
                    let slot = *slot;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if selection.with(|s| s.time) == Some(slot) {
                                    "time-slot selected"
                                } else {
                                    "time-slot"
                                }
                            }
                            on:click=move |_| selection.update(|s| s.time = Some(slot))
                        >
                            {slot}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
