//! # Plant Care Core Library
//!
//! This library provides the data model and the small pure models behind the
//! plant tracker: a decaying "water level" that tells when a plant needs
//! attention again, and the day/night theming derived from the wall clock.
//!
//! ## Design Philosophy
//!
//! ### Time Is An Input
//! Nothing in the core reads the system clock. Every function that depends on
//! the current instant takes it as a parameter, so the same stored plant can be
//! evaluated "now", "in a week" or "at a simulated 9 PM" without patching
//! global state. The [`clock`] module is the only place that talks to the OS.
//!
//! ### Degrade, Don't Fail
//! Incomplete plant records never crash the display:
//! - **Never watered**: the water level reads 100%
//! - **Missing or non-positive frequency**: the water level reads 0%
//!
//! ### Data Flow
//! 1. **Persist**: [`store::PlantStore`] adds, lists and re-waters plants per account
//! 2. **Compute**: [`water_level`] and [`status`] turn a plant into a reading
//! 3. **Theme**: [`day_night`] picks the sky and colours for the current hour
//! 4. **Render**: [`renderer`] prints cards for the terminal
//!
//! ## Core Types
//! - [`Plant`]: a stored plant with its care schedule and last watering date
//! - [`NewPlant`]: user input for the add-plant operation
//! - [`AccountScope`] / [`PlantId`]: opaque identifiers threaded through persistence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod clock;
pub mod config;
pub mod day_night;
pub mod error;
pub mod frequency;
pub mod logger;
pub mod renderer;
pub mod status;
pub mod store;
pub mod water_level;

pub use error::PlantError;

/// Image shown for plants added without a picture.
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1502394202744-021cfbb17454?auto=format&fit=crop&w=500&q=60";

/// Opaque account identifier. Every persistence call is scoped by one.
///
/// Plants belong to exactly one scope and are never visible from another.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountScope(String);

impl AccountScope {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque plant identifier assigned by the store on creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(String);

impl PlantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plant as stored for one account.
///
/// Created by the add-plant operation and mutated only by a watering event,
/// which replaces `last_watered`.
///
/// # Example
/// ```
/// use plant_care_lib::{Plant, PlantId};
/// use chrono::NaiveDate;
///
/// let plant = Plant {
///     id: PlantId::new("p1"),
///     plant_type: "Pothos".to_string(),
///     nickname: None,
///     image_url: String::new(),
///     water_frequency: "Every 7 days".to_string(),
///     water_freq_days: Some(7),
///     last_watered: NaiveDate::from_ymd_opt(2025, 3, 26),
/// };
///
/// assert_eq!(plant.display_name(), "Pothos");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    /// Species or common name, e.g. "Monstera Deliciosa"
    pub plant_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default)]
    pub image_url: String,
    /// Human-readable interval label, e.g. "Every 7 days"
    #[serde(default)]
    pub water_frequency: String,
    /// Day count parsed from `water_frequency`
    #[serde(default)]
    pub water_freq_days: Option<i64>,
    /// Absent means the plant has never been watered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_watered: Option<NaiveDate>,
}

impl Plant {
    /// Nickname when one is set, otherwise the plant type.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.plant_type,
        }
    }
}

/// Input for the add-plant operation.
///
/// Empty optional fields are filled in by the store: the nickname becomes
/// `"My {plant_type}"` and the image falls back to [`DEFAULT_IMAGE_URL`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlant {
    pub plant_type: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub water_frequency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_nickname() {
        let mut plant = Plant {
            id: PlantId::new("1"),
            plant_type: "Snake Plant".to_string(),
            nickname: Some("Sid".to_string()),
            image_url: String::new(),
            water_frequency: String::new(),
            water_freq_days: None,
            last_watered: None,
        };
        assert_eq!(plant.display_name(), "Sid");

        plant.nickname = Some("   ".to_string());
        assert_eq!(plant.display_name(), "Snake Plant");
    }

    #[test]
    fn test_plant_serializes_dates_as_iso_strings() {
        let plant = Plant {
            id: PlantId::new("abc"),
            plant_type: "Aloe Vera".to_string(),
            nickname: None,
            image_url: String::new(),
            water_frequency: "3-4 weeks".to_string(),
            water_freq_days: Some(3),
            last_watered: NaiveDate::from_ymd_opt(2025, 3, 12),
        };

        let json = serde_json::to_value(&plant).unwrap();
        assert_eq!(json["lastWatered"], "2025-03-12");
        assert_eq!(json["waterFreqDays"], 3);
        assert_eq!(json["id"], "abc");
        assert!(json.get("nickname").is_none());
    }

    #[test]
    fn test_plant_tolerates_missing_care_fields() {
        let plant: Plant =
            serde_json::from_str(r#"{"id":"x","plantType":"Peace Lily"}"#).unwrap();
        assert_eq!(plant.water_freq_days, None);
        assert_eq!(plant.last_watered, None);
        assert!(plant.water_frequency.is_empty());
    }
}
