use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{Reptile, Sex, Species};
use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthUser;
use crate::policy;
use crate::services::{ReptileService, UserService};

/// Request body shared by create and update; both replace every mutable field
#[derive(Debug, Deserialize)]
pub struct ReptileBody {
    pub species: String,
    pub name: String,
    pub sex: String,
}

/// GET /reptiles - all reptiles owned by the authenticated user
pub async fn list(Extension(auth): Extension<AuthUser>) -> ApiResult<Vec<Reptile>> {
    // The token may outlive its account; a dangling identity is a client error
    let user = UserService::new()
        .await?
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::bad_request("Invalid user"))?;

    let reptiles = ReptileService::new().await?.list_for_user(user.id).await?;
    Ok(Json(reptiles))
}

/// POST /reptiles - register a reptile under the authenticated user
pub async fn create(
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<ReptileBody>,
) -> ApiResult<Value> {
    let species: Species = policy::validate_enum(&body.species, "species")?;
    let sex: Sex = policy::validate_enum(&body.sex, "sex")?;

    let reptile = ReptileService::new()
        .await?
        .create(auth.user_id, species, &body.name, sex)
        .await?;

    Ok(Json(json!({ "reptile": reptile })))
}

/// GET /reptiles/:reptile_id
pub async fn show(
    Extension(auth): Extension<AuthUser>,
    Path(reptile_id): Path<String>,
) -> ApiResult<Value> {
    let reptile = policy::authorize_parent(&auth, &reptile_id, |id| async move {
        ReptileService::new().await?.find_by_id(id).await
    })
    .await?;

    Ok(Json(json!({ "reptile": reptile })))
}

/// POST /reptiles/:reptile_id - replace the mutable fields
pub async fn update(
    Extension(auth): Extension<AuthUser>,
    Path(reptile_id): Path<String>,
    Json(body): Json<ReptileBody>,
) -> ApiResult<Value> {
    let reptile = policy::authorize_parent(&auth, &reptile_id, |id| async move {
        ReptileService::new().await?.find_by_id(id).await
    })
    .await?;

    let species: Species = policy::validate_enum(&body.species, "species")?;
    let sex: Sex = policy::validate_enum(&body.sex, "sex")?;

    let updated = ReptileService::new()
        .await?
        .update(reptile.id, auth.user_id, species, &body.name, sex)
        .await?;

    Ok(Json(json!({ "reptile": updated })))
}

/// DELETE /reptiles/:reptile_id
pub async fn destroy(
    Extension(auth): Extension<AuthUser>,
    Path(reptile_id): Path<String>,
) -> ApiResult<Value> {
    let reptile = policy::authorize_parent(&auth, &reptile_id, |id| async move {
        ReptileService::new().await?.find_by_id(id).await
    })
    .await?;

    ReptileService::new().await?.delete(reptile.id).await?;

    Ok(Json(json!({ "message": "Reptile successfully deleted" })))
}
