//! # Day/Night Theming
//!
//! Derives the sky shown behind the plant cards from a wall-clock time.
//!
//! ## Day Window
//! Day is the half-open interval `[06:00, 19:00)` in local time: hour 6 is
//! day, hour 19 is night.
//!
//! ## Sun Arc
//! During the day the sun travels a half-sine arc across the screen:
//!
//! ```text
//! horizontal = (minutes_since_midnight - 360) / 780
//! vertical   = 0.5 - 0.45 * sin(π * horizontal)
//! ```
//!
//! Both coordinates are screen fractions with `vertical = 0` at the top, so
//! the sun rises and sets near the middle of the screen and peaks near the top
//! at 12:30. At night a fixed placeholder is returned; the sun is not drawn,
//! and there is no smoothing between the last daytime position and the
//! placeholder.

use chrono::Timelike;
use serde::Serialize;
use std::f64::consts::PI;

/// First daytime hour (inclusive).
pub const DAY_START_HOUR: u32 = 6;

/// First night-time hour (inclusive).
pub const NIGHT_START_HOUR: u32 = 19;

const DAY_START_MINUTE: f64 = (DAY_START_HOUR * 60) as f64;
const DAYLIGHT_MINUTES: f64 = ((NIGHT_START_HOUR - DAY_START_HOUR) * 60) as f64;
const HORIZON: f64 = 0.5;
const ARC_HEIGHT: f64 = 0.45;

/// Hours offered by the time-control panel for previewing the theme.
pub const TIME_PRESETS: [(&str, u32); 10] = [
    ("Dawn (6 AM)", 6),
    ("Morning (9 AM)", 9),
    ("Morning (10 AM)", 10),
    ("Morning (11 AM)", 11),
    ("Noon (12 PM)", 12),
    ("Afternoon (3 PM)", 15),
    ("Evening (6 PM)", 18),
    ("Night (9 PM)", 21),
    ("Midnight (12 AM)", 0),
    ("Late Night (3 AM)", 3),
];

/// `true` outside the `[6, 19)` day window.
pub fn is_night(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < DAY_START_HOUR
}

/// Sun placement as screen fractions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SunPosition {
    /// 0 = left edge, 1 = right edge
    pub horizontal: f64,
    /// 0 = top edge, 1 = bottom edge
    pub vertical: f64,
    /// Fraction of the day window elapsed
    pub progress: f64,
}

impl SunPosition {
    /// Returned for any time outside the day window.
    pub const NIGHT_PLACEHOLDER: SunPosition = SunPosition {
        horizontal: 0.5,
        vertical: 0.5,
        progress: 0.5,
    };

    /// CSS-style offsets, e.g. `("50.0%", "5.0%")`.
    pub fn as_percentages(&self) -> (String, String) {
        (
            format!("{:.1}%", self.horizontal * 100.0),
            format!("{:.1}%", self.vertical * 100.0),
        )
    }
}

/// Sun placement for a wall-clock time.
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use plant_care_lib::day_night::{sun_position, SunPosition};
///
/// let noon = sun_position(&NaiveTime::from_hms_opt(12, 30, 0).unwrap());
/// assert!((noon.horizontal - 0.5).abs() < 1e-9);
/// assert!((noon.vertical - 0.05).abs() < 1e-9);
///
/// let night = sun_position(&NaiveTime::from_hms_opt(20, 0, 0).unwrap());
/// assert_eq!(night, SunPosition::NIGHT_PLACEHOLDER);
/// ```
pub fn sun_position<T: Timelike>(time: &T) -> SunPosition {
    if is_night(time.hour()) {
        return SunPosition::NIGHT_PLACEHOLDER;
    }

    let minutes = f64::from(time.hour() * 60 + time.minute());
    let horizontal = (minutes - DAY_START_MINUTE) / DAYLIGHT_MINUTES;
    let vertical = HORIZON - ARC_HEIGHT * (PI * horizontal).sin();

    SunPosition {
        horizontal,
        vertical,
        progress: horizontal,
    }
}

/// Colours for the current part of the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub is_night: bool,
    /// Page background
    pub background: &'static str,
    /// Primary text colour on top of the cards
    pub text: &'static str,
}

impl ColorScheme {
    pub const DAY: ColorScheme = ColorScheme {
        is_night: false,
        background: "#dcfce7",
        text: "#1e293b",
    };

    pub const NIGHT: ColorScheme = ColorScheme {
        is_night: true,
        background: "#000033",
        text: "#f8fafc",
    };

    pub fn for_time<T: Timelike>(time: &T) -> Self {
        if is_night(time.hour()) {
            Self::NIGHT
        } else {
            Self::DAY
        }
    }
}
