//! Food Log REST API Client
//!
//! HTTP client for the food-log backend.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{daily_total_path, logs_path, ApiError, ApiResult, FoodLogApi, ADD_FOOD_PATH};
use crate::config::ApiConfig;
use crate::model::{AddFoodRequest, DailyTotal, LogEntry, SelectedDate};

/// Food-log API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpFoodLogApi {
    client: Client,
    base_url: String,
}

impl HttpFoodLogApi {
    /// Create a client for the configured backend
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(classify)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(classify)?;
        let response = ensure_success(response).await?;

        let body = response.text().await.map_err(classify)?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FoodLogApi for HttpFoodLogApi {
    async fn fetch_logs(&self, date: &SelectedDate) -> ApiResult<Vec<LogEntry>> {
        self.get_json(&logs_path(date)).await
    }

    async fn fetch_daily_total(&self, date: &SelectedDate) -> ApiResult<DailyTotal> {
        self.get_json(&daily_total_path(date)).await
    }

    async fn add_food(&self, request: &AddFoodRequest) -> ApiResult<()> {
        let url = self.url(ADD_FOOD_PATH);
        tracing::debug!(%url, date = %request.date, food = %request.item.food, "POST");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(classify)?;

        // Body is not part of the contract
        ensure_success(response).await.map(|_| ())
    }
}

/// Map a transport error onto the API error kinds
fn classify(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::Unavailable
    } else {
        ApiError::Transport(e.to_string())
    }
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
