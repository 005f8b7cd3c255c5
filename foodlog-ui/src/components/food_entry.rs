//! Food Entry Component
//!
//! Quick-add form: "food grams" text plus the meal to log it under.

use foodlog::{parse_food_input, AddFoodRequest, Meal};
use leptos::*;

use crate::api;
use crate::state::GlobalState;

/// Add-food form
#[component]
pub fn FoodEntry() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let (text, set_text) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let input = match parse_food_input(&text.get_untracked()) {
            Ok(input) => input,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };

        let entry = input.into_entry(state.meal.get_untracked());
        let request = AddFoodRequest::new(state.date.get_untracked().as_str(), entry.clone());

        state.submitting.set(true);

        spawn_local(async move {
            match api::add_food(&request).await {
                Ok(()) => state.show_success(&format!("Added {}", entry)),
                Err(e) => state.show_error(&format!("Could not add {}: {}", entry, e)),
            }
            state.submitting.set(false);

            // Reload for whichever date is selected now
            state.invalidate();
        });
    };

    view! {
        <section>
            <form class="food-entry" on:submit=on_submit>
                <select on:change=move |ev| state.meal.set(event_target_value(&ev))>
                    {Meal::all()
                        .iter()
                        .map(|meal| {
                            let label = meal.label();
                            view! {
                                <option
                                    value=label
                                    selected=move || is_selected_meal(&state.meal.get(), label)
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="apple 150"
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || state.submitting.get()>
                    {move || if state.submitting.get() { "Saving..." } else { "Add" }}
                </button>
            </form>
        </section>
    }
}

/// Selection is set per option: a value set on the select before its options
/// exist selects nothing, and the first option would show instead.
fn is_selected_meal(current: &str, label: &str) -> bool {
    Meal::resolve(current) == label
}
