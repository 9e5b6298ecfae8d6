//! Client for the price prediction service

pub mod client;
pub mod models;

pub use client::PredictionClient;
pub use models::ApiError;

use async_trait::async_trait;

use crate::models::PredictionRow;

/// Supplies future price predictions for a symbol.
#[async_trait]
pub trait PredictionSource: Send + Sync {
    async fn fetch_predictions(&self, symbol: &str) -> Result<Vec<PredictionRow>, ApiError>;
}
