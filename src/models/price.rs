//! Historical price series models

use chrono::{DateTime, Utc};

/// One row of a symbol's price history as delivered by the series
/// source, both fields still string-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPriceRow {
    pub date: String,
    pub close: String,
}

/// A single data point on the historical price chart
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: DateTime<Utc>,
    pub price: f64,
}
