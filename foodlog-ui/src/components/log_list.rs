//! Log List Component

use leptos::*;

use crate::api;
use crate::state::GlobalState;

/// Entries logged on the selected date.
///
/// Loads are keyed on (date, revision); a response for an older key is
/// dropped. A failed load keeps the last list on screen.
#[component]
pub fn LogList() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let logs = create_local_resource(
        move || (state.date.get(), state.revision.get()),
        |(date, _)| async move { api::fetch_logs(&date).await },
    );

    let lines = create_rw_signal(Vec::<String>::new());

    create_effect(move |_| match logs.get() {
        Some(Ok(entries)) => lines.set(entries.iter().map(ToString::to_string).collect()),
        Some(Err(e)) => state.report_fetch_error("logs", &e),
        None => {}
    });

    view! {
        <section>
            <h2>"Logs"</h2>
            <ul class="log-list">
                {move || {
                    let current = lines.get();
                    if current.is_empty() {
                        view! { <li class="muted">"No entries"</li> }.into_view()
                    } else {
                        current
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()
                    }
                }}
            </ul>
            {move || logs.loading().get().then(|| view! { <p class="muted">"Loading..."</p> })}
        </section>
    }
}
