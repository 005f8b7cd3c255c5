//! App Root Component

use leptos::*;

use crate::components::{DailyTotal, DatePicker, FoodEntry, LogList, Toast};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <main>
            <h1>"Food Log"</h1>

            <DatePicker />
            <LogList />
            <DailyTotal />
            <FoodEntry />

            // Toast notifications
            <Toast />
        </main>
    }
}
