use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Account record. The password hash is stored but never serialized into
/// API responses.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_not_serialized() {
        let user = User {
            id: 1,
            first_name: "Joseph".to_string(),
            last_name: "Ditton".to_string(),
            email: "joseph.ditton@usu.edu".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["firstName"], "Joseph");
        assert_eq!(value["email"], "joseph.ditton@usu.edu");
    }
}
