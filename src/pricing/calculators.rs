//! Core pricing helpers.
//!
//! Pure functions - no database access.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;

use super::models::SlotKey;
use super::services::PricingError;

/// Stay length used when the duration string has no `<N>D` prefix.
pub const DEFAULT_NUM_DAYS: u32 = 4;

/// Longest itinerary the calculator will lay out.
pub const MAX_NUM_DAYS: u32 = 366;

static DURATION_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)D").expect("duration pattern is valid"));

/// Parse the day count from a duration such as `"4D/3N"`.
///
/// Only the leading number before the literal `D` is read; the nights part is
/// ignored. A missing or non-matching string yields [`DEFAULT_NUM_DAYS`].
/// A matched count of zero, or one that does not fit, is rejected.
///
/// # Examples
/// ```
/// use holiday_planner::pricing::parse_num_days;
///
/// assert_eq!(parse_num_days(Some("6D/5N")).unwrap(), 6);
/// assert_eq!(parse_num_days(Some("weekend")).unwrap(), 4);
/// assert!(parse_num_days(Some("0D/0N")).is_err());
/// ```
pub fn parse_num_days(duration: Option<&str>) -> Result<u32, PricingError> {
    let Some(raw) = duration else {
        return Ok(DEFAULT_NUM_DAYS);
    };
    let Some(caps) = DURATION_DAYS.captures(raw) else {
        return Ok(DEFAULT_NUM_DAYS);
    };

    match caps[1].parse::<u32>() {
        Ok(n) if (1..=MAX_NUM_DAYS).contains(&n) => Ok(n),
        _ => Err(PricingError::InvalidDuration(raw.to_string())),
    }
}

/// Number of days strictly between the first and the last day.
pub fn middle_day_count(num_days: u32) -> u32 {
    num_days.saturating_sub(2)
}

/// Labels like `"14 Jun, Fri"` for `num_days` consecutive dates from `start`.
pub fn day_labels(start: NaiveDate, num_days: u32) -> Vec<String> {
    (0..num_days)
        .filter_map(|offset| start.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| date.format("%-d %b, %a").to_string())
        .collect()
}

/// Sum of every itemized slot. The quoted total is always this value.
pub fn sum_slots(item_prices: &BTreeMap<SlotKey, Decimal>) -> Decimal {
    item_prices.values().copied().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== parse_num_days tests ====================

    #[test]
    fn test_parse_num_days_reads_leading_number() {
        assert_eq!(parse_num_days(Some("4D/3N")).unwrap(), 4);
        assert_eq!(parse_num_days(Some("5D/4N")).unwrap(), 5);
        assert_eq!(parse_num_days(Some("12D/11N")).unwrap(), 12);
        assert_eq!(parse_num_days(Some("1D")).unwrap(), 1);
    }

    #[test]
    fn test_parse_num_days_ignores_nights() {
        // Nights never feed the day count, even when inconsistent
        assert_eq!(parse_num_days(Some("3D/9N")).unwrap(), 3);
    }

    #[test]
    fn test_parse_num_days_defaults_when_unmatched() {
        assert_eq!(parse_num_days(None).unwrap(), DEFAULT_NUM_DAYS);
        assert_eq!(parse_num_days(Some("")).unwrap(), DEFAULT_NUM_DAYS);
        assert_eq!(parse_num_days(Some("4 days")).unwrap(), DEFAULT_NUM_DAYS);
        assert_eq!(parse_num_days(Some("4d/3n")).unwrap(), DEFAULT_NUM_DAYS);
        assert_eq!(parse_num_days(Some(" 4D/3N")).unwrap(), DEFAULT_NUM_DAYS);
        assert_eq!(parse_num_days(Some("D/3N")).unwrap(), DEFAULT_NUM_DAYS);
    }

    #[test]
    fn test_parse_num_days_rejects_zero() {
        let err = parse_num_days(Some("0D/0N")).unwrap_err();
        assert!(matches!(err, PricingError::InvalidDuration(ref s) if s == "0D/0N"));
    }

    #[test]
    fn test_parse_num_days_rejects_oversized() {
        assert!(parse_num_days(Some("99999999999D/1N")).is_err());
        assert!(parse_num_days(Some("400D/399N")).is_err());
    }

    // ==================== middle_day_count tests ====================

    #[test]
    fn test_middle_day_count() {
        assert_eq!(middle_day_count(1), 0);
        assert_eq!(middle_day_count(2), 0);
        assert_eq!(middle_day_count(3), 1);
        assert_eq!(middle_day_count(6), 4);
    }

    // ==================== day_labels tests ====================

    #[test]
    fn test_day_labels_format() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert_eq!(
            day_labels(start, 4),
            vec!["14 Jun, Fri", "15 Jun, Sat", "16 Jun, Sun", "17 Jun, Mon"]
        );
    }

    #[test]
    fn test_day_labels_cross_month_boundary() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(
            day_labels(start, 3),
            vec!["28 Feb, Wed", "29 Feb, Thu", "1 Mar, Fri"]
        );
    }

    // ==================== sum_slots tests ====================

    #[test]
    fn test_sum_slots() {
        let mut prices = BTreeMap::new();
        prices.insert(SlotKey::flight(1), dec!(6500));
        prices.insert(SlotKey::hotel(1), dec!(18000));
        prices.insert(SlotKey::activity(1), dec!(0));
        assert_eq!(sum_slots(&prices), dec!(24500));
        assert_eq!(sum_slots(&BTreeMap::new()), dec!(0));
    }
}
