use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Reptile, Sex, Species};

pub struct ReptileService {
    pool: PgPool,
}

impl ReptileService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// Lookup for the ownership policy; absence is reported as `None`, not
    /// an error, so the caller can conflate it with not-owned.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Reptile>, DatabaseError> {
        let reptile = sqlx::query_as::<_, Reptile>("SELECT * FROM reptiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(reptile)
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Reptile>, DatabaseError> {
        let reptiles = sqlx::query_as::<_, Reptile>("SELECT * FROM reptiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(reptiles)
    }

    pub async fn create(
        &self,
        user_id: i64,
        species: Species,
        name: &str,
        sex: Sex,
    ) -> Result<Reptile, DatabaseError> {
        let reptile = sqlx::query_as::<_, Reptile>(
            "INSERT INTO reptiles (user_id, species, name, sex)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(user_id)
        .bind(species.as_str())
        .bind(name)
        .bind(sex.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(reptile)
    }

    /// Full replacement of the mutable fields. The owner id is re-written
    /// from the authenticated identity, matching the create path.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        species: Species,
        name: &str,
        sex: Sex,
    ) -> Result<Reptile, DatabaseError> {
        let reptile = sqlx::query_as::<_, Reptile>(
            "UPDATE reptiles
             SET user_id = $2, species = $3, name = $4, sex = $5, updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(species.as_str())
        .bind(name)
        .bind(sex.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(reptile)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM reptiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
