//! Food Log API
//!
//! The three endpoints the client consumes, and the trait the view talks to:
//!
//! - `GET  /api/logs/{date}`        -> JSON array of log entries
//! - `GET  /api/daily_total/{date}` -> JSON object, backend-defined shape
//! - `POST /api/add_food`           -> `{ date, item }`, response body ignored

#[cfg(feature = "client")]
mod client;
mod error;

#[cfg(feature = "client")]
pub use client::HttpFoodLogApi;
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::model::{AddFoodRequest, DailyTotal, LogEntry, SelectedDate};

/// Path of the add-food endpoint
pub const ADD_FOOD_PATH: &str = "/api/add_food";

/// Path listing the entries logged on `date`
pub fn logs_path(date: &SelectedDate) -> String {
    format!("/api/logs/{}", urlencoding::encode(date.as_str()))
}

/// Path of the aggregate for `date`
pub fn daily_total_path(date: &SelectedDate) -> String {
    format!("/api/daily_total/{}", urlencoding::encode(date.as_str()))
}

/// Operations the log view needs from the backend
#[async_trait]
pub trait FoodLogApi: Send + Sync {
    /// Entries logged on a date, in backend order
    async fn fetch_logs(&self, date: &SelectedDate) -> ApiResult<Vec<LogEntry>>;

    /// Aggregate for a date
    async fn fetch_daily_total(&self, date: &SelectedDate) -> ApiResult<DailyTotal>;

    /// Log a new entry
    async fn add_food(&self, request: &AddFoodRequest) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let date = SelectedDate::from("2024-01-01");

        assert_eq!(logs_path(&date), "/api/logs/2024-01-01");
        assert_eq!(daily_total_path(&date), "/api/daily_total/2024-01-01");
    }

    #[test]
    fn test_paths_encode_segment() {
        let date = SelectedDate::from("2024/01 01");

        assert_eq!(logs_path(&date), "/api/logs/2024%2F01%2001");
    }
}
