use leptos::prelude::*;
use thaw::*;

use crate::availability::verdict;
use crate::booking::{MonthView, Selection};
use crate::holidays::HolidayIndex;
use crate::utils::date::{build_month_matrix, is_sunday, MONTH_NAMES, WEEKDAYS_SHORT};

#[component]
pub fn Calendar(
    month: RwSignal<MonthView>,
    selection: RwSignal<Selection>,
    index: Memo<HolidayIndex>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    // Month navigation never survives a date selection: changing the
    // visible month clears the picked date (and with it the time slot).
    let prev_month = move |_| {
        if month.get().can_prev() {
            selection.update(|s| s.clear_date(&index.get()));
            month.update(|v| *v = v.prev());
        }
    };
    let next_month = move |_| {
        if month.get().can_next() {
            selection.update(|s| s.clear_date(&index.get()));
            month.update(|v| *v = v.next());
        }
    };

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=prev_month
                    disabled=Signal::derive(move || !month.get().can_prev())
                >
                    "‹"
                </Button>
                <div class="calendar-month-label">
                    {move || {
                        let v = month.get();
                        format!("{} {}", MONTH_NAMES[v.month0 as usize], v.year)
                    }}
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=next_month
                    disabled=Signal::derive(move || !month.get().can_next())
                >
                    "›"
                </Button>
            </div>

            <div class="calendar-weekdays">
                {WEEKDAYS_SHORT
                    .iter()
                    .map(|d| view! { <div class="calendar-weekday">{*d}</div> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="calendar-days">
                {move || {
                    let v = month.get();
                    let idx = index.get();
                    let selected = selection.with(|s| s.date);

                    build_month_matrix(v.year, v.month0)
                        .into_iter()
                        .flatten()
                        .map(|day| {
                            use chrono::Datelike;

                            let in_month = v.contains(day);
                            let day_verdict = verdict(day, &idx);
                            let blocked = day_verdict.blocked;
                            let disabled = !in_month || blocked;
                            let title = day_verdict
                                .annotation
                                .as_ref()
                                .map(|a| a.display_names());

                            let mut classes = vec!["calendar-day"];
                            if !in_month {
                                classes.push("outside");
                            }
                            if blocked {
                                classes.push("blocked");
                            }
                            if selected == Some(day) {
                                classes.push("selected");
                            }

                            view! {
                                <button
                                    type="button"
                                    class=classes.join(" ")
                                    disabled=disabled
                                    title=title
                                    on:click=move |_| {
                                        if !disabled {
                                            selection.update(|s| s.select_date(day, &index.get()));
                                        }
                                    }
                                >
                                    {day.day()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            {move || {
                selection
                    .with(|s| s.date)
                    .filter(|d| is_sunday(*d))
                    .map(|_| view! { <p class="calendar-notice">"No workouts on Sundays."</p> })
            }}

            {move || {
                loading
                    .get()
                    .then(|| view! { <p class="calendar-loading">"Loading holidays..."</p> })
            }}
            {move || {
                error.get().map(|message| {
                    view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            {message}
                        </MessageBar>
                    }
                })
            }}
        </div>
    }
}
