//! Data models for the stock view
//!
//! This module organizes the data types passed between the series
//! source, the prediction client, the view services, and the display
//! surface.

pub mod filter;
pub mod metrics;
pub mod prediction;
pub mod price;

// Re-export commonly used types for convenience
pub use filter::FilterOption;
pub use metrics::{MetricsSummary, Trend};
pub use prediction::{PredictionPoint, PredictionRow};
pub use price::{PricePoint, RawPriceRow};
