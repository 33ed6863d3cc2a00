use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Care schedule type allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    Feed,
    Record,
    Clean,
}

impl ScheduleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleType::Feed => "feed",
            ScheduleType::Record => "record",
            ScheduleType::Clean => "clean",
        }
    }
}

impl std::str::FromStr for ScheduleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feed" => Ok(ScheduleType::Feed),
            "record" => Ok(ScheduleType::Record),
            "clean" => Ok(ScheduleType::Clean),
            other => Err(format!("unknown schedule type: {}", other)),
        }
    }
}

impl TryFrom<String> for ScheduleType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Recurring care task, tied to both the reptile it concerns and the user
/// who created it. Recurrence is seven independent weekday flags.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    pub reptile_id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type", try_from = "String")]
    pub kind: ScheduleType,
    pub description: String,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub created_at: DateTime<Utc>,
}
