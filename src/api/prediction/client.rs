//! HTTP client for the prediction service

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::models::ApiError;
use super::PredictionSource;
use crate::models::PredictionRow;

/// Prediction service client fetching per-symbol forecasts
pub struct PredictionClient {
    http_client: HttpClient,
    base_url: String,
}

impl PredictionClient {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    /// Create a new client with the default localhost URL
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with a custom base URL (also for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Map a non-success status to an error
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            500..=599 => ApiError::ServerError(status_code as i32, body_text),
            _ => ApiError::HttpError(status_code as i32, body_text),
        }
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionSource for PredictionClient {
    /// GET /predictions/{symbol}
    ///
    /// Returns the published forecasts for a symbol. A 404 means no
    /// forecasts exist and comes back as an empty list.
    async fn fetch_predictions(&self, symbol: &str) -> Result<Vec<PredictionRow>, ApiError> {
        let url = format!("{}/predictions/{}", self.base_url, symbol);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("No predictions published for {}", symbol);
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Vec<PredictionRow>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}
