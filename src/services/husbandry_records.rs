use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::HusbandryRecord;

pub struct HusbandryRecordService {
    pool: PgPool,
}

impl HusbandryRecordService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn list_for_reptile(
        &self,
        reptile_id: i64,
    ) -> Result<Vec<HusbandryRecord>, DatabaseError> {
        let records = sqlx::query_as::<_, HusbandryRecord>(
            "SELECT * FROM husbandry_records WHERE reptile_id = $1",
        )
        .bind(reptile_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    pub async fn create(
        &self,
        reptile_id: i64,
        length: f64,
        weight: f64,
        temperature: f64,
        humidity: f64,
    ) -> Result<HusbandryRecord, DatabaseError> {
        let record = sqlx::query_as::<_, HusbandryRecord>(
            "INSERT INTO husbandry_records (reptile_id, length, weight, temperature, humidity)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(reptile_id)
        .bind(length)
        .bind(weight)
        .bind(temperature)
        .bind(humidity)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }
}
