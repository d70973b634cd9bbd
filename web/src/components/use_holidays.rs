use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::holidays::{filter_to_year, HolidayIndex, HolidayLoad};
use crate::server::fetch_holidays;

/// Reactive view over the holiday load for one (country, year) identity.
pub struct HolidaysHandle {
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub index: Memo<HolidayIndex>,
}

/// Loads holiday records for the tracked (country, year) pair.
///
/// Every identity change issues a fresh token from the [`HolidayLoad`]
/// state machine, which invalidates whatever request was still in flight;
/// a superseded completion is dropped without touching loading, error, or
/// data. Teardown cancels the same way. The index is re-derived from the
/// record list whenever it changes.
pub fn use_holidays(country: Signal<String>, year: Signal<i32>) -> HolidaysHandle {
    let load = RwSignal::new(HolidayLoad::new());

    Effect::new(move |_| {
        let country = country.get();
        let year = year.get();
        let Some(token) = load.try_update(|l| l.begin()) else {
            return;
        };
        spawn_local(async move {
            match fetch_holidays(country).await {
                Ok(records) => {
                    let records = filter_to_year(records, year);
                    let _ = load.try_update(|l| l.succeed(token, records));
                }
                Err(e) => {
                    leptos::logging::error!("Holiday load failed: {}", e);
                    let _ = load.try_update(|l| l.fail(token));
                }
            }
        });
    });

    on_cleanup(move || {
        let _ = load.try_update(|l| l.cancel());
    });

    HolidaysHandle {
        loading: Signal::derive(move || load.with(|l| l.loading())),
        error: Signal::derive(move || {
            load.with(|l| l.failed().then(|| "Failed to load holidays.".to_string()))
        }),
        index: Memo::new(move |_| load.with(|l| HolidayIndex::from_records(l.records()))),
    }
}
