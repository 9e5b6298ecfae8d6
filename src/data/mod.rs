//! Access to the static price-history resources

pub mod series;

pub use series::{CsvSeriesSource, DataError, SeriesSource};
