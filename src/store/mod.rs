//! # Plant Persistence
//!
//! Add, list and re-water plants for one account at a time.
//!
//! ## Contract
//! - Every call carries an explicit [`AccountScope`]; a plant is only ever
//!   visible inside the scope it was added to
//! - Dates cross this boundary as calendar dates (`YYYY-MM-DD` on the wire)
//! - `update_last_watered` rejects dates after `today`
//! - Backend failures are returned unchanged as [`PlantError::Database`]
//!
//! ## Backends
//! - [`MemoryStore`]: process-local map, used by tests and `--memory`
//! - [`MongoStore`]: one MongoDB document per plant, tagged with its owner
//!
//! `today` is passed in by the caller rather than read here, for the same
//! reason the decay model takes `now`.

use crate::frequency::parse_frequency_days;
use crate::{AccountScope, NewPlant, Plant, PlantError, PlantId, DEFAULT_IMAGE_URL};
use chrono::NaiveDate;

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Persistence operations the tracker relies on.
#[allow(async_fn_in_trait)]
pub trait PlantStore {
    /// Validate and store a new plant, watered `today`.
    async fn add_plant(
        &self,
        scope: &AccountScope,
        plant: NewPlant,
        today: NaiveDate,
    ) -> Result<Plant, PlantError>;

    /// All plants of `scope`, in insertion order.
    async fn list_plants(&self, scope: &AccountScope) -> Result<Vec<Plant>, PlantError>;

    /// Record a watering on `date`, which may not be after `today`.
    async fn update_last_watered(
        &self,
        scope: &AccountScope,
        id: &PlantId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), PlantError>;
}

/// Validated fields of a plant about to be stored, without an id.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantFields {
    pub plant_type: String,
    pub nickname: String,
    pub image_url: String,
    pub water_frequency: String,
    pub water_freq_days: i64,
    pub last_watered: NaiveDate,
}

impl PlantFields {
    pub fn into_plant(self, id: PlantId) -> Plant {
        Plant {
            id,
            plant_type: self.plant_type,
            nickname: Some(self.nickname),
            image_url: self.image_url,
            water_frequency: self.water_frequency,
            water_freq_days: Some(self.water_freq_days),
            last_watered: Some(self.last_watered),
        }
    }
}

/// Apply add-plant validation and defaults.
pub fn prepare_plant(plant: NewPlant, today: NaiveDate) -> Result<PlantFields, PlantError> {
    let plant_type = plant.plant_type.trim().to_string();
    if plant_type.is_empty() {
        return Err(PlantError::Validation("Plant type is required".to_string()));
    }

    let nickname = match plant.nickname.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("My {plant_type}"),
    };
    let image_url = match plant.image_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_IMAGE_URL.to_string(),
    };
    let water_freq_days = i64::from(parse_frequency_days(&plant.water_frequency));

    Ok(PlantFields {
        plant_type,
        nickname,
        image_url,
        water_frequency: plant.water_frequency,
        water_freq_days,
        last_watered: today,
    })
}

/// Reject watering dates after the current day.
pub fn check_watering_date(date: NaiveDate, today: NaiveDate) -> Result<(), PlantError> {
    if date > today {
        return Err(PlantError::FutureWateringDate { date, today });
    }
    Ok(())
}
