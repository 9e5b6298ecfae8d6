//! Series filtering and derived metrics

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::models::{MetricsSummary, PricePoint, RawPriceRow};

/// Parse a CSV date field. Accepts a plain date or a date with time;
/// plain dates land on midnight UTC.
fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc))
}

/// Convert raw rows into chartable price points, skipping rows whose
/// date or close value does not parse.
pub fn to_price_points(rows: &[RawPriceRow]) -> Vec<PricePoint> {
    let mut points = Vec::with_capacity(rows.len());

    for row in rows {
        let date = match parse_date(&row.date) {
            Some(d) => d,
            None => {
                warn!("Skipping row with unparseable date '{}'", row.date);
                continue;
            }
        };
        let price = match row.close.trim().parse::<f64>() {
            Ok(p) => p,
            Err(_) => {
                warn!("Skipping row with unparseable close '{}'", row.close);
                continue;
            }
        };
        points.push(PricePoint { date, price });
    }

    // Sort by date (exports are chronological already, but ensure it)
    points.sort_by_key(|p| p.date);
    points
}

/// Keep only the points at or after the window start, preserving order.
pub fn filter_series(points: &[PricePoint], cutoff: DateTime<Utc>) -> Vec<PricePoint> {
    points.iter().filter(|p| p.date >= cutoff).cloned().collect()
}

/// Derive the window summary from a filtered series.
///
/// The reference price is the first retained point, the current price
/// the last. Returns None for an empty window so the caller keeps the
/// summary it was already displaying.
pub fn compute_metrics(filtered: &[PricePoint]) -> Option<MetricsSummary> {
    let first = filtered.first()?;
    let last = filtered.last()?;

    let reference = first.price;
    let percentage_change = if reference != 0.0 {
        (last.price - reference) / reference * 100.0
    } else {
        0.0
    };

    Some(MetricsSummary {
        current_price: last.price,
        percentage_change,
    })
}
