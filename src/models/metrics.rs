//! Derived window summary

/// Price-change summary for the currently visible window.
///
/// The default (0, 0) is what a display shows before the first series
/// arrives, and what it keeps showing when a window turns out empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsSummary {
    pub current_price: f64,
    pub percentage_change: f64,
}

/// Direction of the windowed price move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl MetricsSummary {
    /// A flat window counts as up, matching how the change is rendered.
    pub fn trend(&self) -> Trend {
        if self.percentage_change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_direction() {
        let up = MetricsSummary { current_price: 110.0, percentage_change: 10.0 };
        let down = MetricsSummary { current_price: 90.0, percentage_change: -10.0 };
        let flat = MetricsSummary::default();

        assert_eq!(up.trend(), Trend::Up);
        assert_eq!(down.trend(), Trend::Down);
        assert_eq!(flat.trend(), Trend::Up);
    }
}
