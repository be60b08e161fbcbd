//! Qualitative water status buckets and the phrases shown for them.
//!
//! | level         | bucket   |
//! |---------------|----------|
//! | `0`           | critical |
//! | `1..=30`      | low      |
//! | `31..=80`     | medium   |
//! | `81..=100`    | high     |
//!
//! Phrase choice inside a bucket is uniform-random. The random source is
//! always passed in, so a seeded `StdRng` makes rendering reproducible.

use crate::water_level::WaterReading;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Shown instead of a bucket phrase for plants that were never watered.
pub const NOT_WATERED_PHRASE: &str = "Not yet watered";

const CRITICAL_PHRASES: &[&str] = &[
    "Water me now!",
    "Bone dry in here",
    "Help, I'm wilting",
];

const LOW_PHRASES: &[&str] = &[
    "Getting thirsty",
    "Could use a drink soon",
    "Running low on water",
];

const MEDIUM_PHRASES: &[&str] = &[
    "Doing fine for now",
    "Comfortably hydrated",
    "No rush on watering",
];

const HIGH_PHRASES: &[&str] = &[
    "Freshly watered",
    "Happy and hydrated",
    "Soaking it all up",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterStatus {
    Critical,
    Low,
    Medium,
    High,
}

impl WaterStatus {
    pub const ALL: [WaterStatus; 4] = [
        WaterStatus::Critical,
        WaterStatus::Low,
        WaterStatus::Medium,
        WaterStatus::High,
    ];

    pub fn from_level(level: u8) -> Self {
        match level {
            0 => WaterStatus::Critical,
            1..=30 => WaterStatus::Low,
            31..=80 => WaterStatus::Medium,
            _ => WaterStatus::High,
        }
    }

    /// Candidate phrases for this bucket. Never empty, disjoint across buckets.
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            WaterStatus::Critical => CRITICAL_PHRASES,
            WaterStatus::Low => LOW_PHRASES,
            WaterStatus::Medium => MEDIUM_PHRASES,
            WaterStatus::High => HIGH_PHRASES,
        }
    }

    /// Badge colour the status pill is drawn in.
    pub fn badge_color(self) -> &'static str {
        match self {
            WaterStatus::Critical => "red",
            WaterStatus::Low => "orange",
            WaterStatus::Medium => "yellow",
            WaterStatus::High => "green",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WaterStatus::Critical => "critical",
            WaterStatus::Low => "low",
            WaterStatus::Medium => "medium",
            WaterStatus::High => "high",
        }
    }
}

impl fmt::Display for WaterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniformly pick one of the bucket's phrases.
pub fn pick_phrase<R: Rng>(status: WaterStatus, rng: &mut R) -> &'static str {
    let phrases = status.phrases();
    phrases[rng.random_range(0..phrases.len())]
}

/// Phrase for a full reading: fixed text for never-watered plants,
/// otherwise a random phrase from the reading's bucket.
pub fn phrase_for<R: Rng>(reading: &WaterReading, rng: &mut R) -> &'static str {
    if reading.is_watered() {
        pick_phrase(reading.status, rng)
    } else {
        NOT_WATERED_PHRASE
    }
}
