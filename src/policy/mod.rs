//! Owner-authorization and field-validation policy.
//!
//! Every resource-scoped route goes through [`authorize_parent`] before it
//! reads or mutates anything: the path id must parse, the parent entity must
//! exist, and its owner must be the authenticated user. Absent and
//! not-owned parents produce the same 401 so resource existence is never
//! leaked across accounts.

use std::future::Future;
use std::str::FromStr;

use crate::database::manager::DatabaseError;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Entities that carry an owning user id
pub trait Owned {
    fn owner_id(&self) -> i64;
}

/// Parse a raw path parameter as an entity id. Ids are positive integers;
/// zero, negatives, and non-numeric input are all rejected the same way.
pub fn parse_parent_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::bad_request("Invalid Reptile Id")),
    }
}

/// Gate a resource-scoped operation on an owned parent entity.
///
/// `lookup` fetches the parent by its parsed id; the caller supplies the
/// query so the policy stays independent of any one entity. Returns the
/// verified parent, safe to use for the operation that follows.
pub async fn authorize_parent<T, F, Fut>(
    user: &AuthUser,
    raw_id: &str,
    lookup: F,
) -> Result<T, ApiError>
where
    T: Owned,
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Result<Option<T>, DatabaseError>>,
{
    let id = parse_parent_id(raw_id)?;

    let parent = lookup(id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    if parent.owner_id() != user.user_id {
        return Err(ApiError::unauthorized("Unauthorized"));
    }

    Ok(parent)
}

/// Check a raw field value against a closed allow-list, producing the
/// `Invalid <field>` message the API has always used.
pub fn validate_enum<T: FromStr>(raw: &str, field: &str) -> Result<T, ApiError> {
    raw.parse::<T>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {}", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{ScheduleType, Sex, Species};

    #[derive(Debug, PartialEq)]
    struct Pet {
        id: i64,
        user_id: i64,
    }

    impl Owned for Pet {
        fn owner_id(&self) -> i64 {
            self.user_id
        }
    }

    fn identity(user_id: i64) -> AuthUser {
        AuthUser { user_id }
    }

    #[test]
    fn parse_accepts_positive_integers_only() {
        assert_eq!(parse_parent_id("1").unwrap(), 1);
        assert_eq!(parse_parent_id("42").unwrap(), 42);

        for raw in ["0", "-3", "abc", "", "1.5", "9999999999999999999999"] {
            let err = parse_parent_id(raw).unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.message(), "Invalid Reptile Id");
        }
    }

    #[tokio::test]
    async fn owner_passes_authorization() {
        let pet = authorize_parent(&identity(7), "3", |id| async move {
            Ok::<_, DatabaseError>(Some(Pet { id, user_id: 7 }))
        })
        .await
        .unwrap();

        assert_eq!(pet, Pet { id: 3, user_id: 7 });
    }

    #[tokio::test]
    async fn missing_and_foreign_parents_are_indistinguishable() {
        let missing = authorize_parent(&identity(7), "3", |_| async {
            Ok::<Option<Pet>, DatabaseError>(None)
        })
        .await
        .unwrap_err();

        let foreign = authorize_parent(&identity(7), "3", |id| async move {
            Ok::<_, DatabaseError>(Some(Pet { id, user_id: 8 }))
        })
        .await
        .unwrap_err();

        assert_eq!(missing.status_code(), 401);
        assert_eq!(foreign.status_code(), 401);
        assert_eq!(missing.message(), foreign.message());
    }

    #[tokio::test]
    async fn bad_id_fails_before_lookup_runs() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let looked_up = AtomicBool::new(false);
        let err = authorize_parent(&identity(7), "abc", |_| {
            looked_up.store(true, Ordering::SeqCst);
            async { Ok::<Option<Pet>, DatabaseError>(None) }
        })
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert!(!looked_up.load(Ordering::SeqCst));
    }

    #[test]
    fn validate_enum_messages_name_the_field() {
        assert!(validate_enum::<Species>("corn_snake", "species").is_ok());
        assert!(validate_enum::<Sex>("f", "sex").is_ok());
        assert!(validate_enum::<ScheduleType>("feed", "schedule type").is_ok());

        let err = validate_enum::<Species>("gecko", "species").unwrap_err();
        assert_eq!(err.message(), "Invalid species");

        let err = validate_enum::<Sex>("unknown", "sex").unwrap_err();
        assert_eq!(err.message(), "Invalid sex");

        let err = validate_enum::<ScheduleType>("water", "schedule type").unwrap_err();
        assert_eq!(err.message(), "Invalid schedule type");
    }
}
