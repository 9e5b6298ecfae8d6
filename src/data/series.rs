//! CSV-backed series source
//!
//! Each symbol's history lives in `<data_dir>/<symbol>.csv` with a
//! header row. Only the `Date` and `Close` columns are read; any
//! other columns the export carries are ignored.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::models::RawPriceRow;

/// Errors from locating or reading a symbol's price resource
#[derive(Debug, Error)]
pub enum DataError {
    #[error("No price data found for symbol '{0}'")]
    NotFound(String),
    #[error("Price data for '{symbol}' is missing the '{column}' column")]
    MissingColumn { symbol: String, column: &'static str },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Supplies the raw historical rows for a symbol, oldest first.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    async fn fetch_series(&self, symbol: &str) -> Result<Vec<RawPriceRow>, DataError>;
}

/// Series source reading per-symbol CSV exports from a data directory.
pub struct CsvSeriesSource {
    data_dir: PathBuf,
}

impl CsvSeriesSource {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", symbol))
    }
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim().to_lowercase() == name)
}

#[async_trait]
impl SeriesSource for CsvSeriesSource {
    async fn fetch_series(&self, symbol: &str) -> Result<Vec<RawPriceRow>, DataError> {
        let path = self.csv_path(symbol);
        if !path.exists() {
            return Err(DataError::NotFound(symbol.to_string()));
        }
        debug!("Loading price history from {}", path.display());

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&path)?;

        let headers = reader.headers()?.clone();
        let date_col = find_column(&headers, "date").ok_or_else(|| DataError::MissingColumn {
            symbol: symbol.to_string(),
            column: "Date",
        })?;
        let close_col = find_column(&headers, "close").ok_or_else(|| DataError::MissingColumn {
            symbol: symbol.to_string(),
            column: "Close",
        })?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(RawPriceRow {
                date: record.get(date_col).unwrap_or("").to_string(),
                close: record.get(close_col).unwrap_or("").to_string(),
            });
        }

        debug!("Loaded {} rows for {}", rows.len(), symbol);
        Ok(rows)
    }
}
