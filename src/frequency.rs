//! Watering-frequency labels.
//!
//! Plants store the label the user picked ("Every 7 days", "7-10 days") next
//! to the day count the decay model needs. The count is the first integer
//! in the label, or 0 when there is none.

/// Label preselected in the add-plant form.
pub const DEFAULT_FREQUENCY: &str = "Every 7 days";

/// Labels offered by the add-plant form.
pub const FREQUENCY_PRESETS: [&str; 6] = [
    "Every 3 days",
    "Every 5 days",
    "Every 7 days",
    "Every 10 days",
    "Every 14 days",
    "Every 30 days",
];

/// First run of ASCII digits in `label`, or 0 when there is none.
///
/// A digit run too large for `u32` saturates to `u32::MAX`, which the decay
/// model reads as a plant that practically never dries out.
///
/// # Example
/// ```
/// use plant_care_lib::frequency::parse_frequency_days;
///
/// assert_eq!(parse_frequency_days("Every 7 days"), 7);
/// assert_eq!(parse_frequency_days("7-10 days"), 7);
/// assert_eq!(parse_frequency_days("weekly"), 0);
/// ```
pub fn parse_frequency_days(label: &str) -> u32 {
    label
        .split(|c: char| !c.is_ascii_digit())
        .find(|run| !run.is_empty())
        .map(|run| run.parse().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_parse_to_their_day_counts() {
        let days: Vec<u32> = FREQUENCY_PRESETS
            .iter()
            .map(|label| parse_frequency_days(label))
            .collect();
        assert_eq!(days, vec![3, 5, 7, 10, 14, 30]);
        assert_eq!(parse_frequency_days(DEFAULT_FREQUENCY), 7);
    }

    #[test]
    fn test_first_integer_wins() {
        assert_eq!(parse_frequency_days("3-4 weeks"), 3);
        assert_eq!(parse_frequency_days("every 14 days or 2 weeks"), 14);
        assert_eq!(parse_frequency_days("10days"), 10);
    }

    #[test]
    fn test_no_integer_defaults_to_zero() {
        assert_eq!(parse_frequency_days(""), 0);
        assert_eq!(parse_frequency_days("when dry"), 0);
        assert_eq!(parse_frequency_days("-"), 0);
    }

    #[test]
    fn test_leading_zeros_and_overflow() {
        assert_eq!(parse_frequency_days("Every 007 days"), 7);
        assert_eq!(parse_frequency_days("Every 99999999999 days"), u32::MAX);
        assert_eq!(parse_frequency_days("Every 4294967295 days"), u32::MAX);
        assert_eq!(parse_frequency_days("Every 4294967296 days"), u32::MAX);
    }

    #[test]
    fn test_huge_interval_reads_nearly_full() {
        use crate::water_level::{compute_water_level, watered_instant};
        use chrono::{Duration, NaiveDate};

        let watered = watered_instant(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        let days = i64::from(parse_frequency_days("Every 99999999999 days"));
        let level = compute_water_level(Some(watered), Some(days), watered + Duration::days(30));
        assert_eq!(level, 100);
    }
}
