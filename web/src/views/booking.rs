use chrono::{Datelike, Local};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::availability::annotate;
use crate::booking::{
    evaluate_gate, time_pickable, GateState, MonthView, Selection, AGE_DEFAULT, AGE_MAX, AGE_MIN,
};
use crate::components::{use_holidays, Calendar, EmailField, PhotoField, TimeSlots};

const COUNTRY: &str = "PL";

#[component]
pub fn BookingPage() -> impl IntoView {
    let today = Local::now().date_naive();
    let current_year = today.year();

    // The load identity: a change to either triggers a fresh fetch and
    // invalidates the one in flight.
    let country = RwSignal::new(COUNTRY.to_string());
    let year = RwSignal::new(current_year);
    let holidays = use_holidays(country.into(), year.into());
    let index = holidays.index;

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let age = RwSignal::new(AGE_DEFAULT);
    let photo_error = RwSignal::new(None::<String>);

    let view_month = RwSignal::new(MonthView::new(current_year, today.month0()));
    let selection = RwSignal::new(Selection::default());

    // A date picked while holiday data was still loading may turn out to
    // be blocked; re-check the time slot on every index update.
    Effect::new(move |_| {
        let idx = index.get();
        let stale = selection.with_untracked(|s| s.time.is_some() && !time_pickable(s.date, &idx));
        if stale {
            selection.update(|s| s.time = None);
        }
    });

    let can_pick_time =
        Signal::derive(move || index.with(|idx| selection.with(|s| time_pickable(s.date, idx))));

    let gate = Memo::new(move |_| {
        index.with(|idx| selection.with(|s| evaluate_gate(s, age.get(), idx)))
    });

    let annotation = Signal::derive(move || {
        index.with(|idx| selection.with(|s| s.date.and_then(|d| annotate(d, idx))))
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Delivery transport is out of scope; the gate hands over the flat
        // field bundle and we log it.
        if let GateState::Complete(bundle) = gate.get() {
            leptos::logging::log!("Application submitted: {:?}", bundle.fields());
        }
    };

    view! {
        <main class="booking-page">
            <form class="booking-form" on:submit=on_submit>
                <section>
                    <h2>"Personal info"</h2>

                    <label class="form-field">
                        <span class="form-label">"First Name"</span>
                        <input
                            type="text"
                            class="text-input"
                            placeholder="John"
                            prop:value=first_name
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        <span class="form-label">"Last Name"</span>
                        <input
                            type="text"
                            class="text-input"
                            placeholder="Doe"
                            prop:value=last_name
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>

                    <EmailField value=email/>

                    <label class="form-field">
                        <span class="form-label">"Age"</span>
                        <div class="age-bounds">
                            <span>{AGE_MIN}</span>
                            <span>{AGE_MAX}</span>
                        </div>
                        <input
                            type="range"
                            min="0"
                            max="100"
                            prop:value=move || age.get().to_string()
                            on:input=move |ev| {
                                if let Ok(v) = event_target_value(&ev).parse::<u8>() {
                                    age.set(v.clamp(AGE_MIN, AGE_MAX));
                                }
                            }
                        />
                        <span class="age-value">{move || age.get()}</span>
                    </label>

                    <PhotoField selection=selection error=photo_error/>
                </section>

                <section>
                    <h2>"Your workout"</h2>

                    <div class="workout-row">
                        <div class="date-column">
                            <span class="form-label">"Date"</span>
                            <Calendar
                                month=view_month
                                selection=selection
                                index=index
                                loading=holidays.loading
                                error=holidays.error
                            />
                        </div>

                        {move || {
                            can_pick_time.get().then(|| {
                                view! {
                                    <div class="time-column">
                                        <span class="form-label">"Time"</span>
                                        <TimeSlots selection=selection/>
                                    </div>
                                }
                            })
                        }}
                    </div>
                </section>

                {move || {
                    annotation.get().map(|a| {
                        view! {
                            <p class="holiday-note">
                                "It is " <span>{a.display_names()}</span> "."
                            </p>
                        }
                    })
                }}

                <button
                    type="submit"
                    class="submit-button"
                    disabled=move || !gate.get().submit_enabled()
                >
                    "Send Application"
                </button>
            </form>
        </main>
    }
}
