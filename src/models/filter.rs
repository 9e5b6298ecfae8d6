//! Lookback window selection

use std::fmt;

/// Lookback window options offered by the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterOption {
    #[default]
    SevenDays,
    OneMonth,
    SixMonths,
    OneYear,
}

impl FilterOption {
    /// Every option, in the order a selector presents them.
    pub const ALL: [FilterOption; 4] = [
        FilterOption::SevenDays,
        FilterOption::OneMonth,
        FilterOption::SixMonths,
        FilterOption::OneYear,
    ];

    /// Parse a selection label. An unrecognized label falls back to
    /// the seven-day window instead of failing.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "7 days" | "7d" | "1w" => FilterOption::SevenDays,
            "1 month" | "1m" | "1mnt" => FilterOption::OneMonth,
            "6 months" | "6m" | "6mnt" => FilterOption::SixMonths,
            "1 year" | "1y" => FilterOption::OneYear,
            _ => FilterOption::default(),
        }
    }

    /// The label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            FilterOption::SevenDays => "7 days",
            FilterOption::OneMonth => "1 month",
            FilterOption::SixMonths => "6 months",
            FilterOption::OneYear => "1 year",
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        assert_eq!(FilterOption::parse("7 days"), FilterOption::SevenDays);
        assert_eq!(FilterOption::parse("1 month"), FilterOption::OneMonth);
        assert_eq!(FilterOption::parse("6 months"), FilterOption::SixMonths);
        assert_eq!(FilterOption::parse("1 year"), FilterOption::OneYear);
    }

    #[test]
    fn test_parse_short_aliases() {
        assert_eq!(FilterOption::parse("7d"), FilterOption::SevenDays);
        assert_eq!(FilterOption::parse("1M"), FilterOption::OneMonth);
        assert_eq!(FilterOption::parse(" 1y "), FilterOption::OneYear);
    }

    #[test]
    fn test_parse_unrecognized_falls_back_to_seven_days() {
        assert_eq!(FilterOption::parse("fortnight"), FilterOption::SevenDays);
        assert_eq!(FilterOption::parse(""), FilterOption::SevenDays);
    }

    #[test]
    fn test_label_round_trip() {
        for option in FilterOption::ALL {
            assert_eq!(FilterOption::parse(option.label()), option);
        }
    }
}
