//! Date Picker Component

use foodlog::SelectedDate;
use leptos::*;

use crate::state::GlobalState;

/// Date input with previous/today/next buttons
#[component]
pub fn DatePicker() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let on_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        // Cleared input keeps the current day
        if !value.is_empty() {
            state.select_date(SelectedDate::from(value));
        }
    };

    view! {
        <section class="date-picker">
            <button type="button" title="Previous day" on:click=move |_| state.shift_date(-1)>
                "‹"
            </button>
            <input
                type="date"
                prop:value=move || state.date.get().to_string()
                on:change=on_change
            />
            <button type="button" on:click=move |_| state.select_date(SelectedDate::today())>
                "Today"
            </button>
            <button type="button" title="Next day" on:click=move |_| state.shift_date(1)>
                "›"
            </button>
        </section>
    }
}
