//! # Water Level Decay Model
//!
//! Maps (last watering instant, watering interval, current instant) to the
//! percentage of water a plant has left before it needs watering again.
//!
//! ## Model
//!
//! ```text
//! days_since = floor((now - last_watered) / 1 day)
//! level      = round(max(0, 100 - days_since / freq_days * 100))
//! ```
//!
//! - **Elapsed duration, not calendar difference**: a plant watered earlier
//!   today has `days_since = 0`, and a plant watered at 11 PM checked at 1 AM
//!   still reads 0 days even though the date changed
//! - **Never watered**: 100% (assume fresh until told otherwise)
//! - **Missing, zero or negative frequency**: 0% instead of a division fault
//! - **Watering date ahead of `now`**: clamped to 100%
//!
//! The result changes as `now` advances, so callers re-evaluate it on every
//! tick instead of caching it alongside the plant.

use crate::status::WaterStatus;
use crate::Plant;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Level reported right after watering, and for plants never watered.
pub const FULL_LEVEL: u8 = 100;

/// Level reported once the interval has fully elapsed.
pub const EMPTY_LEVEL: u8 = 0;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Instant a stored watering date stands for: midnight UTC of that date.
pub fn watered_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days elapsed between `last_watered` and `now`, truncated toward
/// negative infinity. Negative when `last_watered` lies in the future.
pub fn elapsed_days(last_watered: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_watered)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

/// Days since the stored watering date, or `None` if never watered.
pub fn days_since_watering(last_watered: Option<NaiveDate>, now: DateTime<Utc>) -> Option<i64> {
    last_watered.map(|date| elapsed_days(watered_instant(date), now))
}

/// Remaining water in percent, in `[0, 100]`.
///
/// # Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use plant_care_lib::water_level::compute_water_level;
///
/// let watered = Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap();
///
/// assert_eq!(compute_water_level(Some(watered), Some(7), watered), 100);
/// assert_eq!(compute_water_level(Some(watered), Some(14), watered + Duration::days(7)), 50);
/// assert_eq!(compute_water_level(Some(watered), Some(7), watered + Duration::days(9)), 0);
/// assert_eq!(compute_water_level(None, Some(7), watered), 100);
/// assert_eq!(compute_water_level(Some(watered), None, watered), 0);
/// ```
pub fn compute_water_level(
    last_watered: Option<DateTime<Utc>>,
    water_freq_days: Option<i64>,
    now: DateTime<Utc>,
) -> u8 {
    let Some(last_watered) = last_watered else {
        return FULL_LEVEL;
    };
    let freq_days = match water_freq_days {
        Some(days) if days > 0 => days,
        _ => return EMPTY_LEVEL,
    };

    let days_since = elapsed_days(last_watered, now);
    let remaining = 100.0 - (days_since as f64 / freq_days as f64) * 100.0;

    remaining.clamp(0.0, 100.0).round() as u8
}

/// Water level for a stored plant at `now`.
pub fn plant_water_level(plant: &Plant, now: DateTime<Utc>) -> u8 {
    compute_water_level(
        plant.last_watered.map(watered_instant),
        plant.water_freq_days,
        now,
    )
}

/// Everything the presentation layer needs to draw one plant's water gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterReading {
    pub level: u8,
    pub status: WaterStatus,
    /// `None` when the plant has never been watered
    pub days_since: Option<i64>,
}

impl WaterReading {
    pub fn for_plant(plant: &Plant, now: DateTime<Utc>) -> Self {
        let level = plant_water_level(plant, now);
        Self {
            level,
            status: WaterStatus::from_level(level),
            days_since: days_since_watering(plant.last_watered, now),
        }
    }

    pub fn is_watered(&self) -> bool {
        self.days_since.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlantId;
    use chrono::{Duration, TimeZone};

    fn watered_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 28, 0, 0, 0).unwrap()
    }

    fn plant(last_watered: Option<NaiveDate>, water_freq_days: Option<i64>) -> Plant {
        Plant {
            id: PlantId::new("p"),
            plant_type: "Monstera Deliciosa".to_string(),
            nickname: None,
            image_url: String::new(),
            water_frequency: "Every 7 days".to_string(),
            water_freq_days,
            last_watered,
        }
    }

    #[test]
    fn test_full_when_never_watered() {
        for freq in [None, Some(-3), Some(0), Some(7)] {
            assert_eq!(compute_water_level(None, freq, watered_at()), 100);
        }
    }

    #[test]
    fn test_empty_when_frequency_missing_or_not_positive() {
        let now = watered_at();
        for freq in [None, Some(0), Some(-1), Some(-30)] {
            assert_eq!(compute_water_level(Some(now), freq, now), 0);
            assert_eq!(
                compute_water_level(Some(now), freq, now + Duration::days(2)),
                0
            );
        }
    }

    #[test]
    fn test_watered_earlier_today_counts_zero_days() {
        let watered = watered_at();
        let later_same_day = watered + Duration::hours(23) + Duration::minutes(59);
        assert_eq!(elapsed_days(watered, later_same_day), 0);
        assert_eq!(compute_water_level(Some(watered), Some(7), later_same_day), 100);
    }

    #[test]
    fn test_late_evening_watering_reads_zero_days_after_midnight() {
        let watered = Utc.with_ymd_and_hms(2025, 3, 28, 23, 0, 0).unwrap();
        let check = Utc.with_ymd_and_hms(2025, 3, 29, 1, 0, 0).unwrap();
        assert_eq!(elapsed_days(watered, check), 0);
    }

    #[test]
    fn test_decay_steps_per_whole_day() {
        let watered = watered_at();
        let levels: Vec<u8> = (0..=8)
            .map(|d| compute_water_level(Some(watered), Some(7), watered + Duration::days(d)))
            .collect();
        assert_eq!(levels, vec![100, 86, 71, 57, 43, 29, 14, 0, 0]);
    }

    #[test]
    fn test_future_watering_date_clamps_to_full() {
        let now = watered_at();
        let tomorrow = now + Duration::days(1);
        assert_eq!(elapsed_days(tomorrow, now), -1);
        assert_eq!(compute_water_level(Some(tomorrow), Some(7), now), 100);
    }

    #[test]
    fn test_watered_instant_is_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 28).unwrap();
        assert_eq!(watered_instant(date), watered_at());
    }

    #[test]
    fn test_reading_for_plant() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 28).unwrap();
        let now = watered_at() + Duration::days(3) + Duration::hours(5);

        let reading = WaterReading::for_plant(&plant(Some(date), Some(10)), now);
        assert_eq!(reading.level, 70);
        assert_eq!(reading.status, WaterStatus::Medium);
        assert_eq!(reading.days_since, Some(3));
        assert!(reading.is_watered());

        let never = WaterReading::for_plant(&plant(None, Some(10)), now);
        assert_eq!(never.level, 100);
        assert_eq!(never.status, WaterStatus::High);
        assert_eq!(never.days_since, None);
        assert!(!never.is_watered());
    }
}
