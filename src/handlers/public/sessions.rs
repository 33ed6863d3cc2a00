use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, password, Claims};
use crate::error::{ApiError, ApiResult};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /sessions - authenticate with email and password, receive a
/// short-lived session token alongside the account record.
///
/// Unknown email and wrong password share one 404 message so callers cannot
/// probe which addresses have accounts.
pub async fn create(Json(body): Json<LoginRequest>) -> ApiResult<Value> {
    let users = UserService::new().await?;

    let user = users
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| ApiError::not_found("Invalid email or password"))?;

    if !password::verify(&body.password, &user.password_hash)? {
        return Err(ApiError::not_found("Invalid email or password"));
    }

    let token = auth::generate_token(Claims::new(user.id))?;

    Ok(Json(json!({ "user": user, "token": token })))
}
