//! Prediction annotation

use crate::models::{PredictionPoint, PredictionRow};

/// Attach to each predicted point its percentage change against the
/// last observed price. A zero last price degrades the figure to 0
/// instead of dividing.
pub fn annotate_predictions(rows: Vec<PredictionRow>, last_price: f64) -> Vec<PredictionPoint> {
    rows.into_iter()
        .map(|row| {
            let percentage_change = if last_price != 0.0 {
                (row.predicted_price - last_price) / last_price * 100.0
            } else {
                0.0
            };
            PredictionPoint {
                date: row.date,
                predicted_price: row.predicted_price,
                percentage_change,
            }
        })
        .collect()
}
