//! Log view controller

use super::{LogSurface, ViewError};
use crate::api::{ApiError, FoodLogApi};
use crate::input::parse_food_input;
use crate::model::{AddFoodRequest, DailyTargets, Meal, NewEntry, SelectedDate};

/// The food-log widget.
///
/// Holds the selected date and meal; every fetch targets the date selected
/// when it is issued. Failed fetches leave the surface as it was and report
/// through [`LogSurface::show_error`].
pub struct LogView<A, S> {
    api: A,
    surface: S,
    date: SelectedDate,
    meal: String,
    targets: Option<DailyTargets>,
}

impl<A: FoodLogApi, S: LogSurface> LogView<A, S> {
    /// Create a view on today's date, logging to the default meal
    pub fn new(api: A, surface: S) -> Self {
        Self {
            api,
            surface,
            date: SelectedDate::today(),
            meal: Meal::default().label().to_string(),
            targets: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<SelectedDate>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_meal(mut self, meal: &str) -> Self {
        self.set_meal(meal);
        self
    }

    /// Show progress against these targets alongside the total
    pub fn with_targets(mut self, targets: DailyTargets) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn selected_date(&self) -> &SelectedDate {
        &self.date
    }

    pub fn meal(&self) -> &str {
        &self.meal
    }

    pub fn set_meal(&mut self, meal: &str) {
        self.meal = Meal::resolve(meal);
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Select a date and load its logs and total
    pub async fn select_date(&mut self, date: impl Into<SelectedDate>) -> Result<(), ViewError> {
        self.date = date.into();
        tracing::debug!(date = %self.date, "date selected");

        self.surface.show_date(&self.date);
        self.refresh().await
    }

    /// Move the selection by `days` calendar days
    pub async fn shift_date(&mut self, days: i64) -> Result<(), ViewError> {
        match self.date.shift_days(days) {
            Some(date) => self.select_date(date).await,
            None => {
                let err = ViewError::InvalidDate(self.date.to_string());
                self.surface.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Reload both the log list and the total.
    ///
    /// Both fetches run even if the first fails; the first error is returned.
    pub async fn refresh(&mut self) -> Result<(), ViewError> {
        let logs = self.refresh_logs().await;
        let total = self.refresh_total().await;
        logs.and(total)
    }

    /// Reload the log list for the selected date
    pub async fn refresh_logs(&mut self) -> Result<(), ViewError> {
        match self.api.fetch_logs(&self.date).await {
            Ok(entries) => {
                tracing::debug!(date = %self.date, count = entries.len(), "logs loaded");
                let lines = entries.iter().map(ToString::to_string).collect();
                self.surface.render_logs(lines);
                Ok(())
            }
            Err(e) => Err(self.fetch_failed("logs", e)),
        }
    }

    /// Reload the daily total for the selected date
    pub async fn refresh_total(&mut self) -> Result<(), ViewError> {
        let total = match self.api.fetch_daily_total(&self.date).await {
            Ok(total) => total,
            Err(e) => return Err(self.fetch_failed("daily total", e)),
        };

        self.surface.render_total(&total.pretty());

        if let (Some(targets), Some(nutrients)) = (self.targets, total.nutrients()) {
            self.surface.render_progress(&targets.progress(&nutrients));
        }

        Ok(())
    }

    /// Add food from "food grams" text under the current meal.
    ///
    /// Rejected text issues no request. Otherwise the entry is posted and the
    /// view reloads whether or not the post succeeded. The result reflects
    /// the post; reload failures are surfaced on their own.
    pub async fn submit_food(&mut self, raw: &str) -> Result<NewEntry, ViewError> {
        let input = match parse_food_input(raw) {
            Ok(input) => input,
            Err(e) => {
                tracing::debug!(input = raw, error = %e, "food input rejected");
                self.surface.show_error(&e.to_string());
                return Err(e.into());
            }
        };

        let entry = input.into_entry(self.meal.clone());
        let request = AddFoodRequest::new(self.date.as_str(), entry.clone());

        let posted = self.api.add_food(&request).await;
        match &posted {
            Ok(()) => {
                tracing::info!(date = %request.date, entry = %entry, "food added");
                self.surface.show_notice(&format!("Added {}", entry));
            }
            Err(e) => {
                tracing::warn!(date = %request.date, entry = %entry, error = %e, "add food failed");
                self.surface.show_error(&format!("Could not add {}: {}", entry, e));
            }
        }

        // Errors were already surfaced by the reload itself
        let _ = self.refresh().await;

        posted.map(|()| entry).map_err(ViewError::from)
    }

    fn fetch_failed(&mut self, what: &str, err: ApiError) -> ViewError {
        tracing::warn!(date = %self.date, error = %err, "failed to load {}", what);
        self.surface
            .show_error(&format!("Could not load {}: {}", what, err));
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResult;
    use crate::input::InputError;
    use crate::model::{DailyTotal, LogEntry, TargetProgress};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeApi {
        calls: Mutex<Vec<String>>,
        logs: Mutex<HashMap<String, Vec<LogEntry>>>,
        posted: Mutex<Vec<AddFoodRequest>>,
        fail_fetch: AtomicBool,
        fail_add: AtomicBool,
    }

    impl FakeApi {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn error() -> ApiError {
            ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            }
        }
    }

    #[async_trait]
    impl FoodLogApi for FakeApi {
        async fn fetch_logs(&self, date: &SelectedDate) -> ApiResult<Vec<LogEntry>> {
            self.calls.lock().unwrap().push(format!("logs {}", date));
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(Self::error());
            }
            let logs = self.logs.lock().unwrap();
            Ok(logs.get(date.as_str()).cloned().unwrap_or_default())
        }

        async fn fetch_daily_total(&self, date: &SelectedDate) -> ApiResult<DailyTotal> {
            self.calls.lock().unwrap().push(format!("total {}", date));
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(Self::error());
            }
            Ok(DailyTotal::new(
                json!({"kcal": 1325, "protein": 65, "carbs": 175, "fat": 35}),
            ))
        }

        async fn add_food(&self, request: &AddFoodRequest) -> ApiResult<()> {
            self.calls.lock().unwrap().push(format!("add {}", request.date));
            if self.fail_add.load(Ordering::SeqCst) {
                return Err(Self::error());
            }
            self.posted.lock().unwrap().push(request.clone());
            let item = &request.item;
            self.logs
                .lock()
                .unwrap()
                .entry(request.date.clone())
                .or_default()
                .push(LogEntry::grams(&item.meal, &item.food, item.grams as f64));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        dates: Vec<String>,
        logs: Vec<Vec<String>>,
        totals: Vec<String>,
        progress: Vec<Vec<String>>,
        notices: Vec<String>,
        errors: Vec<String>,
    }

    impl LogSurface for RecordingSurface {
        fn show_date(&mut self, date: &SelectedDate) {
            self.dates.push(date.to_string());
        }

        fn render_logs(&mut self, lines: Vec<String>) {
            self.logs.push(lines);
        }

        fn render_total(&mut self, text: &str) {
            self.totals.push(text.to_string());
        }

        fn render_progress(&mut self, rows: &[TargetProgress]) {
            self.progress
                .push(rows.iter().map(TargetProgress::summary).collect());
        }

        fn show_notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }

        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    fn view() -> LogView<FakeApi, RecordingSurface> {
        LogView::new(FakeApi::default(), RecordingSurface::default())
    }

    #[tokio::test]
    async fn test_select_date_loads_logs_and_total() {
        let mut view = view();
        view.api().logs.lock().unwrap().insert(
            "2024-01-01".to_string(),
            vec![
                LogEntry::grams("午餐", "apple", 150.0),
                LogEntry::kcal("晚餐", "便當", 780.0).brand("7-11"),
            ],
        );

        view.select_date("2024-01-01").await.unwrap();

        assert_eq!(
            view.api().calls(),
            vec!["logs 2024-01-01", "total 2024-01-01"]
        );
        let surface = view.surface();
        assert_eq!(surface.dates, vec!["2024-01-01"]);
        assert_eq!(
            surface.logs,
            vec![vec!["午餐 - apple (150g)", "晚餐 - 便當 (780 kcal)"]]
        );
        assert!(surface.totals[0].starts_with("{\n  \"kcal\": 1325"));
        assert!(surface.progress.is_empty());
    }

    #[tokio::test]
    async fn test_empty_day_clears_list() {
        let mut view = view();
        view.select_date("2024-01-02").await.unwrap();

        assert_eq!(view.surface().logs, vec![Vec::<String>::new()]);
    }

    #[tokio::test]
    async fn test_submit_posts_and_refreshes() {
        let mut view = view().with_date("2024-01-01");

        let entry = view.submit_food("apple 150").await.unwrap();

        assert_eq!(entry.to_string(), "午餐 - apple (150g)");
        assert_eq!(
            view.api().calls(),
            vec!["add 2024-01-01", "logs 2024-01-01", "total 2024-01-01"]
        );
        let posted = view.api().posted.lock().unwrap().clone();
        assert_eq!(
            serde_json::to_value(&posted[0]).unwrap(),
            json!({"date": "2024-01-01", "item": {"meal": "午餐", "food": "apple", "grams": 150}})
        );
        assert_eq!(view.surface().logs, vec![vec!["午餐 - apple (150g)"]]);
        assert_eq!(view.surface().notices, vec!["Added 午餐 - apple (150g)"]);
    }

    #[tokio::test]
    async fn test_submit_uses_selected_meal() {
        let mut view = view().with_date("2024-01-01").with_meal("breakfast");
        assert_eq!(view.meal(), "早餐");

        view.submit_food("oats 60g").await.unwrap();

        let posted = view.api().posted.lock().unwrap().clone();
        assert_eq!(posted[0].item.meal, "早餐");
        assert_eq!(posted[0].item.grams, 60);
    }

    #[tokio::test]
    async fn test_rejected_input_sends_nothing() {
        let mut view = view();

        let err = view.submit_food("apple").await.unwrap_err();

        assert!(matches!(
            err,
            ViewError::Input(InputError::MissingQuantity { .. })
        ));
        assert!(view.api().calls().is_empty());
        assert_eq!(view.surface().errors.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_post_still_refreshes() {
        let mut view = view().with_date("2024-01-01");
        view.api().fail_add.store(true, Ordering::SeqCst);

        let err = view.submit_food("apple 150").await.unwrap_err();

        assert!(matches!(err, ViewError::Api(ApiError::Status { status: 500, .. })));
        assert_eq!(
            view.api().calls(),
            vec!["add 2024-01-01", "logs 2024-01-01", "total 2024-01-01"]
        );
        assert!(view.surface().notices.is_empty());
        assert_eq!(
            view.surface().errors,
            vec!["Could not add 午餐 - apple (150g): API error 500: boom"]
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_rendering() {
        let mut view = view();
        view.select_date("2024-01-01").await.unwrap();

        view.api().fail_fetch.store(true, Ordering::SeqCst);
        let err = view.refresh().await.unwrap_err();

        assert!(matches!(err, ViewError::Api(_)));
        assert_eq!(view.surface().logs.len(), 1);
        assert_eq!(view.surface().totals.len(), 1);
        assert_eq!(
            view.surface().errors,
            vec![
                "Could not load logs: API error 500: boom",
                "Could not load daily total: API error 500: boom",
            ]
        );
    }

    #[tokio::test]
    async fn test_progress_rendered_with_targets() {
        let mut view = view().with_targets(DailyTargets::default());

        view.refresh_total().await.unwrap();

        assert_eq!(
            view.surface().progress,
            vec![vec![
                "熱量 1325 / 2650 kcal",
                "蛋白質 65 / 130 g",
                "碳水 175 / 350 g",
                "脂肪 35 / 70 g",
            ]]
        );
    }

    #[tokio::test]
    async fn test_shift_date() {
        let mut view = view().with_date("2024-03-01");

        view.shift_date(-1).await.unwrap();
        assert_eq!(view.selected_date().as_str(), "2024-02-29");

        let mut view = view.with_date("someday");
        let err = view.shift_date(1).await.unwrap_err();
        assert_eq!(err, ViewError::InvalidDate("someday".to_string()));
    }
}
