use super::{check_watering_date, prepare_plant, PlantStore};
use crate::config::DatabaseConfig;
use crate::{AccountScope, NewPlant, Plant, PlantError, PlantId};
use chrono::{DateTime, NaiveDate, Utc};
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{options::ClientOptions, Client, Collection};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Stored shape of a plant. `owner` carries the account scope.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PlantDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    owner: String,
    plant_type: String,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    water_frequency: String,
    #[serde(default)]
    water_freq_days: Option<i64>,
    #[serde(default)]
    last_watered: Option<NaiveDate>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl PlantDocument {
    fn into_plant(self) -> Option<Plant> {
        Some(Plant {
            id: PlantId::new(self.id?.to_hex()),
            plant_type: self.plant_type,
            nickname: self.nickname,
            image_url: self.image_url,
            water_frequency: self.water_frequency,
            water_freq_days: self.water_freq_days,
            last_watered: self.last_watered,
        })
    }
}

/// Plants stored in a MongoDB collection.
pub struct MongoStore {
    collection: Collection<PlantDocument>,
}

impl MongoStore {
    /// Connect and ping the server so a bad URI fails here, not on first use.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, PlantError> {
        let mut options = ClientOptions::parse(config.uri.as_str()).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        let db = client.database(&config.name);
        db.run_command(doc! { "ping": 1 }).await?;

        info!(database = %config.name, collection = %config.collection, "connected to MongoDB");
        Ok(Self {
            collection: db.collection::<PlantDocument>(&config.collection),
        })
    }
}

fn parse_object_id(id: &PlantId) -> Result<ObjectId, PlantError> {
    ObjectId::parse_str(id.as_str()).map_err(|_| PlantError::InvalidId(id.to_string()))
}

impl PlantStore for MongoStore {
    async fn add_plant(
        &self,
        scope: &AccountScope,
        plant: NewPlant,
        today: NaiveDate,
    ) -> Result<Plant, PlantError> {
        let fields = prepare_plant(plant, today)?;
        let document = PlantDocument {
            id: None,
            owner: scope.to_string(),
            plant_type: fields.plant_type.clone(),
            nickname: Some(fields.nickname.clone()),
            image_url: fields.image_url.clone(),
            water_frequency: fields.water_frequency.clone(),
            water_freq_days: Some(fields.water_freq_days),
            last_watered: Some(fields.last_watered),
            created_at: Some(Utc::now()),
        };

        let result = self.collection.insert_one(document).await?;
        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| PlantError::InvalidId(result.inserted_id.to_string()))?;

        info!(scope = %scope, id = %oid, plant_type = %fields.plant_type, "added plant");
        Ok(fields.into_plant(PlantId::new(oid.to_hex())))
    }

    async fn list_plants(&self, scope: &AccountScope) -> Result<Vec<Plant>, PlantError> {
        let documents: Vec<PlantDocument> = self
            .collection
            .find(doc! { "owner": scope.as_str() })
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        let total = documents.len();
        let plants: Vec<Plant> = documents
            .into_iter()
            .filter_map(PlantDocument::into_plant)
            .collect();
        if plants.len() != total {
            warn!(scope = %scope, skipped = total - plants.len(), "skipped documents without an id");
        }

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
        let oid = parse_object_id(id)?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": oid, "owner": scope.as_str() },
                doc! { "$set": { "lastWatered": date.to_string() } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(PlantError::NotFound { id: id.clone() });
        }

        info!(scope = %scope, id = %id, date = %date, "updated watering date");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_object_id_is_rejected() {
        let err = parse_object_id(&PlantId::new("plant-1")).unwrap_err();
        assert!(matches!(err, PlantError::InvalidId(_)));

        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&PlantId::new(oid.to_hex())).unwrap(), oid);
    }

    #[test]
    fn test_document_without_id_is_skipped() {
        let document = PlantDocument {
            id: None,
            owner: "1".to_string(),
            plant_type: "Pothos".to_string(),
            nickname: None,
            image_url: String::new(),
            water_frequency: String::new(),
            water_freq_days: None,
            last_watered: None,
            created_at: None,
        };
        assert!(document.into_plant().is_none());
    }

    #[test]
    fn test_document_round_trips_through_bson() {
        let oid = ObjectId::new();
        let document = PlantDocument {
            id: Some(oid),
            owner: "1".to_string(),
            plant_type: "Peace Lily".to_string(),
            nickname: Some("Lily".to_string()),
            image_url: String::new(),
            water_frequency: "5-7 days".to_string(),
            water_freq_days: Some(5),
            last_watered: NaiveDate::from_ymd_opt(2025, 3, 30),
            created_at: None,
        };

        let bson = mongodb::bson::to_document(&document).unwrap();
        assert_eq!(bson.get_str("lastWatered").unwrap(), "2025-03-30");
        assert_eq!(bson.get_str("owner").unwrap(), "1");

        let decoded: PlantDocument = mongodb::bson::from_document(bson).unwrap();
        let plant = decoded.into_plant().unwrap();
        assert_eq!(plant.id, PlantId::new(oid.to_hex()));
        assert_eq!(plant.water_freq_days, Some(5));
        assert_eq!(plant.display_name(), "Lily");
    }
}
