use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::Feeding;
use crate::error::ApiResult;
use crate::middleware::AuthUser;
use crate::policy;
use crate::services::{FeedingService, ReptileService};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedingBody {
    pub food_item: String,
}

/// GET /reptiles/:reptile_id/feedings
pub async fn list(
    Extension(auth): Extension<AuthUser>,
    Path(reptile_id): Path<String>,
) -> ApiResult<Vec<Feeding>> {
    let reptile = policy::authorize_parent(&auth, &reptile_id, |id| async move {
        ReptileService::new().await?.find_by_id(id).await
    })
    .await?;

    let feedings = FeedingService::new()
        .await?
        .list_for_reptile(reptile.id)
        .await?;
    Ok(Json(feedings))
}

/// POST /reptiles/:reptile_id/feedings
pub async fn create(
    Extension(auth): Extension<AuthUser>,
    Path(reptile_id): Path<String>,
    Json(body): Json<CreateFeedingBody>,
) -> ApiResult<Value> {
    let reptile = policy::authorize_parent(&auth, &reptile_id, |id| async move {
        ReptileService::new().await?.find_by_id(id).await
    })
    .await?;

    let feeding = FeedingService::new()
        .await?
        .create(reptile.id, &body.food_item)
        .await?;

    Ok(Json(json!({ "feeding": feeding })))
}
