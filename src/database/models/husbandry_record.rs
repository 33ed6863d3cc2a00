use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Point-in-time husbandry measurements for a reptile. Append-only.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HusbandryRecord {
    pub id: i64,
    pub reptile_id: i64,
    pub length: f64,
    pub weight: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub created_at: DateTime<Utc>,
}
