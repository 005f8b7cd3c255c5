//! Toast Component
//!
//! The latest add/load outcome. Messages clear themselves on a timer
//! (see `GlobalState::show_success` and `show_error`).

use leptos::*;

use crate::state::GlobalState;

/// Success and error messages, success first
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let messages = move || {
        [
            (state.success.get(), Outcome::Added),
            (state.error.get(), Outcome::Failed),
        ]
        .into_iter()
        .filter_map(|(message, outcome)| message.map(|message| (message, outcome)))
        .map(|(message, outcome)| {
            view! {
                <p class=outcome.class() role=outcome.role()>
                    {outcome.icon()}
                    " "
                    {message}
                </p>
            }
        })
        .collect_view()
    };

    view! { <div class="toasts" aria-live="polite">{messages}</div> }
}

#[derive(Clone, Copy)]
enum Outcome {
    Added,
    Failed,
}

impl Outcome {
    fn class(self) -> &'static str {
        match self {
            Outcome::Added => "toast success",
            Outcome::Failed => "toast error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Outcome::Added => "✓",
            Outcome::Failed => "✕",
        }
    }

    // Errors interrupt screen readers, notices wait
    fn role(self) -> &'static str {
        match self {
            Outcome::Added => "status",
            Outcome::Failed => "alert",
        }
    }
}
