use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::HusbandryRecord;
use crate::error::ApiResult;
use crate::middleware::AuthUser;
use crate::policy;
use crate::services::{HusbandryRecordService, ReptileService};

#[derive(Debug, Deserialize)]
pub struct CreateHusbandryRecordBody {
    pub length: f64,
    pub weight: f64,
    pub temperature: f64,
    pub humidity: f64,
}

/// GET /reptiles/:reptile_id/husbandry-records
pub async fn list(
    Extension(auth): Extension<AuthUser>,
    Path(reptile_id): Path<String>,
) -> ApiResult<Vec<HusbandryRecord>> {
    let reptile = policy::authorize_parent(&auth, &reptile_id, |id| async move {
        ReptileService::new().await?.find_by_id(id).await
    })
    .await?;

    let records = HusbandryRecordService::new()
        .await?
        .list_for_reptile(reptile.id)
        .await?;
    Ok(Json(records))
}

/// POST /reptiles/:reptile_id/husbandry-records
pub async fn create(
    Extension(auth): Extension<AuthUser>,
    Path(reptile_id): Path<String>,
    Json(body): Json<CreateHusbandryRecordBody>,
) -> ApiResult<Value> {
    let reptile = policy::authorize_parent(&auth, &reptile_id, |id| async move {
        ReptileService::new().await?.find_by_id(id).await
    })
    .await?;

    let record = HusbandryRecordService::new()
        .await?
        .create(
            reptile.id,
            body.length,
            body.weight,
            body.temperature,
            body.humidity,
        )
        .await?;

    Ok(Json(json!({ "husbandryRecord": record })))
}
