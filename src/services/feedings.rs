use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::Feeding;

pub struct FeedingService {
    pool: PgPool,
}

impl FeedingService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn list_for_reptile(&self, reptile_id: i64) -> Result<Vec<Feeding>, DatabaseError> {
        let feedings =
            sqlx::query_as::<_, Feeding>("SELECT * FROM feedings WHERE reptile_id = $1")
                .bind(reptile_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(feedings)
    }

    pub async fn create(&self, reptile_id: i64, food_item: &str) -> Result<Feeding, DatabaseError> {
        let feeding = sqlx::query_as::<_, Feeding>(
            "INSERT INTO feedings (reptile_id, food_item)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(reptile_id)
        .bind(food_item)
        .fetch_one(&self.pool)
        .await?;
        Ok(feeding)
    }
}
