//! Global Application State
//!
//! Reactive state management using Leptos signals.

use foodlog::{ApiError, Meal, SelectedDate};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Date whose logs and total are shown
    pub date: RwSignal<SelectedDate>,
    /// Meal new entries are logged under
    pub meal: RwSignal<String>,
    /// Bumped after every add so both views reload
    pub revision: RwSignal<u64>,
    /// An add request is in flight
    pub submitting: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    /// Today, default meal, nothing in flight
    pub fn new() -> Self {
        Self {
            date: create_rw_signal(SelectedDate::today()),
            meal: create_rw_signal(Meal::default().label().to_string()),
            revision: create_rw_signal(0),
            submitting: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    pub fn select_date(&self, date: SelectedDate) {
        self.date.set(date);
    }

    /// Move the selected date by `days`
    pub fn shift_date(&self, days: i64) {
        let current = self.date.get_untracked();
        match current.shift_days(days) {
            Some(date) => self.date.set(date),
            None => self.show_error(&format!("Not a calendar date: {}", current)),
        }
    }

    /// Reload everything keyed on the revision
    pub fn invalidate(&self) {
        self.revision.update(|revision| *revision += 1);
    }

    /// Log a failed load to the console and show it
    pub fn report_fetch_error(&self, what: &str, error: &ApiError) {
        let message = format!("Could not load {}: {}", what, error);
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&message));
        self.show_error(&message);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
