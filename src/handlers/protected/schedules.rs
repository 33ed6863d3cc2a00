use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{Schedule, ScheduleType};
use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthUser;
use crate::policy;
use crate::services::{NewSchedule, ReptileService, ScheduleService, UserService};

#[derive(Debug, Deserialize)]
pub struct CreateScheduleBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

/// GET /schedules - every schedule the authenticated user has created,
/// across all of their reptiles
pub async fn list_for_user(Extension(auth): Extension<AuthUser>) -> ApiResult<Vec<Schedule>> {
    let user = UserService::new()
        .await?
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::bad_request("Invalid user"))?;

    let schedules = ScheduleService::new().await?.list_for_user(user.id).await?;
    Ok(Json(schedules))
}

/// GET /reptiles/:reptile_id/schedules
pub async fn list_for_reptile(
    Extension(auth): Extension<AuthUser>,
    Path(reptile_id): Path<String>,
) -> ApiResult<Vec<Schedule>> {
    let reptile = policy::authorize_parent(&auth, &reptile_id, |id| async move {
        ReptileService::new().await?.find_by_id(id).await
    })
    .await?;

    let schedules = ScheduleService::new()
        .await?
        .list_for_reptile(reptile.id)
        .await?;
    Ok(Json(schedules))
}

/// POST /reptiles/:reptile_id/schedules
pub async fn create(
    Extension(auth): Extension<AuthUser>,
    Path(reptile_id): Path<String>,
    Json(body): Json<CreateScheduleBody>,
) -> ApiResult<Value> {
    let reptile = policy::authorize_parent(&auth, &reptile_id, |id| async move {
        ReptileService::new().await?.find_by_id(id).await
    })
    .await?;

    let kind: ScheduleType = policy::validate_enum(&body.kind, "schedule type")?;

    let schedule = ScheduleService::new()
        .await?
        .create(NewSchedule {
            reptile_id: reptile.id,
            user_id: auth.user_id,
            kind,
            description: body.description,
            monday: body.monday,
            tuesday: body.tuesday,
            wednesday: body.wednesday,
            thursday: body.thursday,
            friday: body.friday,
            saturday: body.saturday,
            sunday: body.sunday,
        })
        .await?;

    Ok(Json(json!({ "schedule": schedule })))
}
