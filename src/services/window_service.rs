//! Time-window resolution
//!
//! Maps a selected lookback option to the absolute instant where the
//! visible window starts.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Months, Utc};
use lazy_static::lazy_static;

use crate::models::FilterOption;

/// How a filter option moves "now" back to the window start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRule {
    /// A fixed number of 24-hour days.
    Days(i64),
    /// A calendar-month decrement, clamping at month end.
    Months(u32),
}

lazy_static! {
    static ref WINDOW_RULES: HashMap<FilterOption, WindowRule> = {
        let mut rules = HashMap::new();
        rules.insert(FilterOption::SevenDays, WindowRule::Days(7));
        rules.insert(FilterOption::OneMonth, WindowRule::Months(1));
        rules.insert(FilterOption::SixMonths, WindowRule::Months(6));
        rules.insert(FilterOption::OneYear, WindowRule::Months(12));
        rules
    };
}

/// Look up the adjustment rule for a filter option.
pub fn window_rule(filter: FilterOption) -> WindowRule {
    WINDOW_RULES
        .get(&filter)
        .copied()
        .unwrap_or(WindowRule::Days(7))
}

/// Resolve the window start for a filter option relative to `now`.
/// The result is never later than `now`.
pub fn resolve_cutoff(filter: FilterOption, now: DateTime<Utc>) -> DateTime<Utc> {
    match window_rule(filter) {
        WindowRule::Days(days) => now - Duration::days(days),
        WindowRule::Months(months) => now
            .checked_sub_months(Months::new(months))
            // Only reachable at the edge of chrono's representable range
            .unwrap_or_else(|| now - Duration::days(30 * i64::from(months))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_cutoff_never_after_now() {
        let now = Utc::now();
        for option in FilterOption::ALL {
            assert!(resolve_cutoff(option, now) <= now, "cutoff after now for {}", option);
        }
    }

    #[test]
    fn test_seven_days_is_exactly_seven_days() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 15, 30, 0).unwrap();
        let cutoff = resolve_cutoff(FilterOption::SevenDays, now);
        assert_eq!(now - cutoff, Duration::days(7));
    }

    #[test]
    fn test_one_month_decrements_month_field() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap();
        let cutoff = resolve_cutoff(FilterOption::OneMonth, now);
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2026, 7, 7, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_month_decrement_clamps_at_month_end() {
        let now = Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap();
        let cutoff = resolve_cutoff(FilterOption::OneMonth, now);
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2026, 2, 28, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_six_months_and_one_year() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 0, 0, 0).unwrap();
        assert_eq!(
            resolve_cutoff(FilterOption::SixMonths, now),
            Utc.with_ymd_and_hms(2026, 2, 7, 0, 0, 0).unwrap()
        );
        assert_eq!(
            resolve_cutoff(FilterOption::OneYear, now),
            Utc.with_ymd_and_hms(2025, 8, 7, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_unrecognized_label_resolves_like_seven_days() {
        let now = Utc::now();
        let fallback = resolve_cutoff(FilterOption::parse("3 centuries"), now);
        assert_eq!(fallback, resolve_cutoff(FilterOption::SevenDays, now));
    }
}
