use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A single recorded feeding. Append-only: there is no update or delete.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Feeding {
    pub id: i64,
    pub reptile_id: i64,
    pub food_item: String,
    pub created_at: DateTime<Utc>,
}
