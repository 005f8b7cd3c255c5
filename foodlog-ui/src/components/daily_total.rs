//! Daily Total Component

use foodlog::{model, DailyTargets, NutrientTotals};
use leptos::*;

use crate::api;
use crate::state::GlobalState;

/// Aggregate for the selected date, shown verbatim as JSON
#[component]
pub fn DailyTotal() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let total = create_local_resource(
        move || (state.date.get(), state.revision.get()),
        |(date, _)| async move { api::fetch_daily_total(&date).await },
    );

    let shown = create_rw_signal(None::<model::DailyTotal>);

    create_effect(move |_| match total.get() {
        Some(Ok(value)) => shown.set(Some(value)),
        Some(Err(e)) => state.report_fetch_error("daily total", &e),
        None => {}
    });

    view! {
        <section>
            <h2>"Daily total"</h2>
            <pre class="daily-total">
                {move || shown.get().map(|value| value.pretty()).unwrap_or_default()}
            </pre>
            {move || {
                shown
                    .get()
                    .and_then(|value| value.nutrients())
                    .map(|totals| view! { <TargetBars totals=totals /> })
            }}
        </section>
    }
}

#[component]
fn TargetBars(totals: NutrientTotals) -> impl IntoView {
    DailyTargets::default()
        .progress(&totals)
        .into_iter()
        .map(|row| {
            let width = format!("width: {:.0}%", row.ratio().min(1.0) * 100.0);
            let class = if row.is_exceeded() { "progress exceeded" } else { "progress" };

            view! {
                <div class="target">
                    <span>{row.summary()}</span>
                    <div class=class>
                        <div style=width />
                    </div>
                </div>
            }
        })
        .collect_view()
}
