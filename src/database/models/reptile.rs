use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::policy::Owned;

/// Species allow-list for registered reptiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    BallPython,
    KingSnake,
    CornSnake,
    RedtailBoa,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::BallPython => "ball_python",
            Species::KingSnake => "king_snake",
            Species::CornSnake => "corn_snake",
            Species::RedtailBoa => "redtail_boa",
        }
    }
}

impl std::str::FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ball_python" => Ok(Species::BallPython),
            "king_snake" => Ok(Species::KingSnake),
            "corn_snake" => Ok(Species::CornSnake),
            "redtail_boa" => Ok(Species::RedtailBoa),
            other => Err(format!("unknown species: {}", other)),
        }
    }
}

impl TryFrom<String> for Species {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    M,
    F,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::M => "m",
            Sex::F => "f",
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Sex::M),
            "f" => Ok(Sex::F),
            other => Err(format!("unknown sex: {}", other)),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reptile {
    pub id: i64,
    pub user_id: i64,
    #[sqlx(try_from = "String")]
    pub species: Species,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub sex: Sex,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Reptile {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}
