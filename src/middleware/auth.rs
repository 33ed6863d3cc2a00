use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::Claims;
use crate::config;
use crate::error::ApiError;

/// Authenticated identity extracted from the session token.
///
/// Handlers take this as an explicit `Extension<AuthUser>` parameter so the
/// authorization dependency is visible in every signature.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    pub user_id: i64,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}

/// Token authentication middleware for the protected routes.
///
/// Accepts the credential either as an `Authorization: Bearer` header or a
/// `token` cookie. Missing or unverifiable tokens are rejected with 401
/// before any handler runs; the response body never says which check failed.
pub async fn token_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token =
        extract_token(&headers).ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    let claims = validate_token(&token).map_err(|_| ApiError::unauthorized("Unauthorized"))?;

    // Inject the identity into the request for downstream handlers
    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Pull the session token from the Authorization header or the `token` cookie
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(auth_header) = headers.get("authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                if !token.trim().is_empty() {
                    return Some(token.trim().to_string());
                }
            }
        }
    }

    let cookies = headers.get("cookie")?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == "token" && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Validate the token signature and expiry, returning the embedded claims
fn validate_token(token: &str) -> Result<Claims, String> {
    let secret = &config::config().security.token_secret;

    if secret.is_empty() {
        return Err("token secret not configured".to_string());
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("invalid token: {}", e))?;

    Ok(token_data.claims)
}
