//! Future price prediction models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One predicted price as published by the prediction service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRow {
    pub date: NaiveDate,
    pub predicted_price: f64,
}

/// A prediction with its percentage change against the last observed
/// price attached
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub predicted_price: f64,
    pub percentage_change: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_row_deserializes_camel_case() {
        let json = r#"{"date": "2026-08-14", "predictedPrice": 123.5}"#;
        let row: PredictionRow = serde_json::from_str(json).expect("Deserialization failed");

        assert_eq!(row.date, NaiveDate::from_ymd_opt(2026, 8, 14).unwrap());
        assert_eq!(row.predicted_price, 123.5);
    }

    #[test]
    fn test_prediction_list_deserializes() {
        let json = r#"[
            {"date": "2026-08-14", "predictedPrice": 123.5},
            {"date": "2026-08-15", "predictedPrice": 125.0}
        ]"#;
        let rows: Vec<PredictionRow> = serde_json::from_str(json).expect("Deserialization failed");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].predicted_price, 125.0);
    }
}
