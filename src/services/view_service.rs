//! View state and refresh orchestration
//!
//! Owns the display state for one symbol and recomputes it whenever
//! the symbol or the selected window changes. The series fetch and the
//! prediction fetch complete independently, so every refresh hands out
//! a tag and completions carrying a stale tag are discarded instead of
//! overwriting newer state.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::prediction::PredictionSource;
use crate::data::{DataError, SeriesSource};
use crate::models::{FilterOption, MetricsSummary, PredictionPoint, PricePoint};
use crate::services::{prediction_service, series_service, window_service};

/// Identifies the symbol/filter change that triggered a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    pub seq: u64,
    pub symbol: String,
    pub filter: FilterOption,
}

/// Errors a refresh surfaces to its caller. Prediction failures are
/// not among them; they only suppress the prediction update.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Failed to load price series: {0}")]
    Series(#[from] DataError),
}

/// Display state for one stock symbol.
#[derive(Debug, Default)]
pub struct StockView {
    symbol: String,
    filter: FilterOption,
    seq: u64,
    series: Vec<PricePoint>,
    metrics: MetricsSummary,
    predictions: Vec<PredictionPoint>,
}

impl StockView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn filter(&self) -> FilterOption {
        self.filter
    }

    /// The points inside the selected window, oldest first.
    pub fn series(&self) -> &[PricePoint] {
        &self.series
    }

    pub fn metrics(&self) -> MetricsSummary {
        self.metrics
    }

    /// The most recently displayed predictions, annotated.
    pub fn predictions(&self) -> &[PredictionPoint] {
        &self.predictions
    }

    /// Record a new symbol/filter selection and hand out the tag that
    /// fetches triggered by it must carry.
    pub fn begin_refresh(&mut self, symbol: &str, filter: FilterOption) -> RequestTag {
        self.seq += 1;
        self.symbol = symbol.to_string();
        self.filter = filter;
        RequestTag {
            seq: self.seq,
            symbol: self.symbol.clone(),
            filter,
        }
    }

    fn is_current(&self, tag: &RequestTag) -> bool {
        tag.seq == self.seq
    }

    /// Apply a completed series fetch. Returns the last price of the
    /// visible window when a summary was produced; that price is the
    /// signal to go fetch predictions.
    ///
    /// An empty window publishes the (empty) series but leaves the
    /// summary untouched. A stale tag leaves everything untouched.
    pub fn apply_series(&mut self, tag: &RequestTag, filtered: Vec<PricePoint>) -> Option<f64> {
        if !self.is_current(tag) {
            debug!(
                "Discarding stale series response for {} (seq {}, current {})",
                tag.symbol, tag.seq, self.seq
            );
            return None;
        }

        self.series = filtered;
        match series_service::compute_metrics(&self.series) {
            Some(metrics) => {
                self.metrics = metrics;
                Some(metrics.current_price)
            }
            None => None,
        }
    }

    /// Apply a completed prediction fetch. An empty list suppresses
    /// the update, leaving the previously displayed predictions in
    /// place. A stale tag leaves everything untouched.
    pub fn apply_predictions(&mut self, tag: &RequestTag, annotated: Vec<PredictionPoint>) {
        if !self.is_current(tag) {
            debug!(
                "Discarding stale prediction response for {} (seq {}, current {})",
                tag.symbol, tag.seq, self.seq
            );
            return;
        }
        if annotated.is_empty() {
            return;
        }
        self.predictions = annotated;
    }

    /// Run the full fetch-filter-annotate cycle for a selection.
    ///
    /// The prediction fetch only starts once the series metrics are
    /// available, because the annotation needs the window's last
    /// price. A failed prediction fetch is logged and suppressed.
    pub async fn refresh<S, P>(
        &mut self,
        series_source: &S,
        prediction_source: &P,
        symbol: &str,
        filter: FilterOption,
    ) -> Result<(), ViewError>
    where
        S: SeriesSource + ?Sized,
        P: PredictionSource + ?Sized,
    {
        let tag = self.begin_refresh(symbol, filter);

        let rows = series_source.fetch_series(&tag.symbol).await?;
        let points = series_service::to_price_points(&rows);
        let cutoff = window_service::resolve_cutoff(tag.filter, Utc::now());
        let filtered = series_service::filter_series(&points, cutoff);
        debug!(
            "{}: {} of {} points fall inside the {} window",
            tag.symbol,
            filtered.len(),
            points.len(),
            tag.filter
        );

        let last_price = match self.apply_series(&tag, filtered) {
            Some(price) => price,
            None => return Ok(()),
        };

        match prediction_source.fetch_predictions(&tag.symbol).await {
            Ok(rows) => {
                let annotated = prediction_service::annotate_predictions(rows, last_price);
                self.apply_predictions(&tag, annotated);
            }
            Err(e) => {
                warn!("Prediction fetch for {} failed: {}", tag.symbol, e);
            }
        }

        Ok(())
    }
}
