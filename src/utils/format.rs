//! Display formatting helpers

use crate::models::{MetricsSummary, Trend};

/// Format a price with two decimals and a currency sign
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a signed percentage with two decimals
pub fn format_percentage(percentage: f64) -> String {
    format!("{:+.2}%", percentage)
}

/// One-line window summary for a symbol, e.g. `AAPL $110.00 (+10.00%) up`
pub fn summary_line(symbol: &str, metrics: &MetricsSummary) -> String {
    let trend = match metrics.trend() {
        Trend::Up => "up",
        Trend::Down => "down",
    };
    format!(
        "{} {} ({}) {}",
        symbol.to_uppercase(),
        format_price(metrics.current_price),
        format_percentage(metrics.percentage_change),
        trend
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_has_two_decimals() {
        assert_eq!(format_price(110.0), "$110.00");
        assert_eq!(format_price(3.14159), "$3.14");
    }

    #[test]
    fn test_percentage_is_signed() {
        assert_eq!(format_percentage(10.0), "+10.00%");
        assert_eq!(format_percentage(-3.456), "-3.46%");
        assert_eq!(format_percentage(0.0), "+0.00%");
    }

    #[test]
    fn test_summary_line_uppercases_symbol() {
        let metrics = MetricsSummary {
            current_price: 110.0,
            percentage_change: 10.0,
        };
        assert_eq!(summary_line("aapl", &metrics), "AAPL $110.00 (+10.00%) up");
    }

    #[test]
    fn test_summary_line_shows_downtrend() {
        let metrics = MetricsSummary {
            current_price: 90.0,
            percentage_change: -10.0,
        };
        assert_eq!(summary_line("AAPL", &metrics), "AAPL $90.00 (-10.00%) down");
    }
}
