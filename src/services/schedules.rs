use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Schedule, ScheduleType};

/// Insert payload for a schedule, after the type has passed validation
#[derive(Debug)]
pub struct NewSchedule {
    pub reptile_id: i64,
    pub user_id: i64,
    pub kind: ScheduleType,
    pub description: String,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

pub struct ScheduleService {
    pool: PgPool,
}

impl ScheduleService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Schedule>, DatabaseError> {
        let schedules =
            sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(schedules)
    }

    pub async fn list_for_reptile(&self, reptile_id: i64) -> Result<Vec<Schedule>, DatabaseError> {
        let schedules =
            sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE reptile_id = $1")
                .bind(reptile_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(schedules)
    }

    pub async fn create(&self, new: NewSchedule) -> Result<Schedule, DatabaseError> {
        let schedule = sqlx::query_as::<_, Schedule>(
            "INSERT INTO schedules
                 (reptile_id, user_id, type, description,
                  monday, tuesday, wednesday, thursday, friday, saturday, sunday)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *",
        )
        .bind(new.reptile_id)
        .bind(new.user_id)
        .bind(new.kind.as_str())
        .bind(&new.description)
        .bind(new.monday)
        .bind(new.tuesday)
        .bind(new.wednesday)
        .bind(new.thursday)
        .bind(new.friday)
        .bind(new.saturday)
        .bind(new.sunday)
        .fetch_one(&self.pool)
        .await?;
        Ok(schedule)
    }
}
