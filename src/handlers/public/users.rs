use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password;
use crate::error::{ApiError, ApiResult};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// GET /users - list all accounts (password hashes are never serialized)
pub async fn list() -> ApiResult<Value> {
    let users = UserService::new().await?.list().await?;
    Ok(Json(json!({ "users": users })))
}

/// POST /users - create an account
pub async fn create(Json(body): Json<CreateUserBody>) -> ApiResult<Value> {
    let users = UserService::new().await?;

    if users.find_by_email(&body.email).await?.is_some() {
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = password::hash(&body.password)?;
    let user = users
        .create(&body.first_name, &body.last_name, &body.email, &password_hash)
        .await?;

    Ok(Json(json!({ "user": user })))
}
