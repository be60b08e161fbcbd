use super::{check_watering_date, prepare_plant, PlantFields, PlantStore};
use crate::{AccountScope, NewPlant, Plant, PlantError, PlantId};
use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Demo collection: (type, frequency label, days since last watering).
const DEMO_PLANTS: [(&str, &str, u64); 6] = [
    ("Monstera Deliciosa", "7-10 days", 4),
    ("Snake Plant", "3-4 weeks", 17),
    ("Pothos", "7-14 days", 6),
    ("Fiddle Leaf Fig", "7 days", 1),
    ("Aloe Vera", "3-4 weeks", 20),
    ("Peace Lily", "5-7 days", 2),
];

/// Plants kept in process memory, grouped by account.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<HashMap<AccountScope, Vec<Plant>>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a small demo collection for `scope`.
    pub fn with_demo_plants(scope: &AccountScope, today: NaiveDate) -> Self {
        let store = Self::new();
        let plants = DEMO_PLANTS
            .iter()
            .filter_map(|(plant_type, frequency, days_ago)| {
                let fields = prepare_plant(
                    NewPlant {
                        plant_type: plant_type.to_string(),
                        water_frequency: frequency.to_string(),
                        ..NewPlant::default()
                    },
                    today.checked_sub_days(Days::new(*days_ago))?,
                )
                .ok()?;
                Some(fields.into_plant(store.allocate_id()))
            })
            .collect();

        let mut accounts = HashMap::new();
        accounts.insert(scope.clone(), plants);
        Self {
            accounts: RwLock::new(accounts),
            next_id: store.next_id,
        }
    }

    fn allocate_id(&self) -> PlantId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        PlantId::new(format!("plant-{n}"))
    }

    fn insert(&self, fields: PlantFields) -> Plant {
        fields.into_plant(self.allocate_id())
    }
}

impl PlantStore for MemoryStore {
    async fn add_plant(
        &self,
        scope: &AccountScope,
        plant: NewPlant,
        today: NaiveDate,
    ) -> Result<Plant, PlantError> {
        let plant = self.insert(prepare_plant(plant, today)?);

        self.accounts
            .write()
            .await
            .entry(scope.clone())
            .or_default()
            .push(plant.clone());

        info!(scope = %scope, id = %plant.id, plant_type = %plant.plant_type, "added plant");
        Ok(plant)
    }

    async fn list_plants(&self, scope: &AccountScope) -> Result<Vec<Plant>, PlantError> {
        let plants = self
            .accounts
            .read()
            .await
            .get(scope)
            .cloned()
            .unwrap_or_default();

        debug!(scope = %scope, count = plants.len(), "listed plants");
        Ok(plants)
    }

    async fn update_last_watered(
        &self,
        scope: &AccountScope,
        id: &PlantId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), PlantError> {
        check_watering_date(date, today)?;

        let mut accounts = self.accounts.write().await;
        let plant = accounts
            .get_mut(scope)
            .and_then(|plants| plants.iter_mut().find(|plant| &plant.id == id))
            .ok_or_else(|| PlantError::NotFound { id: id.clone() })?;
        plant.last_watered = Some(date);

        info!(scope = %scope, id = %id, date = %date, "updated watering date");
        Ok(())
    }
}
