//! HTTP API Client
//!
//! The food-log endpoints over `fetch`.

use foodlog::{
    daily_total_path, logs_path, AddFoodRequest, ApiError, DailyTotal, LogEntry, SelectedDate,
    ADD_FOOD_PATH,
};
use gloo_net::http::{Request, Response};

/// Local storage key holding the API base URL
pub const API_BASE_KEY: &str = "foodlog_api_url";

/// Get the API base URL from local storage.
///
/// Defaults to the page's own origin, so requests go to relative `/api/...`.
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(""))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Full URL of an endpoint path
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}

fn transport(e: gloo_net::Error) -> ApiError {
    match e {
        // fetch() rejects when the server cannot be reached
        gloo_net::Error::JsError(_) => ApiError::Unavailable,
        other => ApiError::Transport(other.to_string()),
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    Err(ApiError::Status {
        status: response.status(),
        message: response.text().await.unwrap_or_default(),
    })
}

async fn get_text(path: &str) -> Result<String, ApiError> {
    let response = Request::get(&endpoint(&get_api_base(), path))
        .send()
        .await
        .map_err(transport)?;

    ensure_ok(response)
        .await?
        .text()
        .await
        .map_err(transport)
}

/// Entries logged on a date
pub async fn fetch_logs(date: &SelectedDate) -> Result<Vec<LogEntry>, ApiError> {
    let body = get_text(&logs_path(date)).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Aggregate for a date
pub async fn fetch_daily_total(date: &SelectedDate) -> Result<DailyTotal, ApiError> {
    let body = get_text(&daily_total_path(date)).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Log a new entry; the response body is ignored
pub async fn add_food(request: &AddFoodRequest) -> Result<(), ApiError> {
    let response = Request::post(&endpoint(&get_api_base(), ADD_FOOD_PATH))
        .json(request)
        .map_err(|e| ApiError::Transport(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(transport)?;

    ensure_ok(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_same_origin() {
        assert_eq!(endpoint("", "/api/logs/2024-01-01"), "/api/logs/2024-01-01");
    }

    #[test]
    fn test_endpoint_with_base() {
        assert_eq!(
            endpoint("http://127.0.0.1:5000/ ", ADD_FOOD_PATH),
            "http://127.0.0.1:5000/api/add_food"
        );
    }
}
