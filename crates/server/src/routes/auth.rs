use axum::{
    Json as ResponseJson, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use db::models::{session::Session, user::User};
use db::services::AuthService;
use serde::{Deserialize, Serialize};
use utils::response::ApiResponse;

use crate::{DeploymentImpl, error::ApiError, middleware::AUTH_TOKEN_COOKIE};
use deployment::Deployment;

const SESSION_TTL_DAYS: i64 = 30;

pub fn router() -> Router<DeploymentImpl> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
}

/// POST /api/auth/login
///
/// The external login flow the gate relies on: verifies credentials, creates
/// a session, and sets the `auth-token` cookie whose presence the gate
/// checks.
pub async fn login(
    State(deployment): State<DeploymentImpl>,
    ResponseJson(req): ResponseJson<LoginRequest>,
) -> Result<Response, ApiError> {
    let pool = &deployment.db().pool;

    let user = User::find_active_by_username(pool, &req.username)
        .await?
        .ok_or_else(|| ApiError::BadRequest("Invalid credentials".to_string()))?;

    let is_valid = AuthService::verify_password(&req.password, &user.password_hash)
        .map_err(|e| ApiError::InternalError(format!("Password verification error: {}", e)))?;
    if !is_valid {
        return Err(ApiError::BadRequest("Invalid credentials".to_string()));
    }

    let token = AuthService::generate_session_token();
    let token_hash = AuthService::hash_session_token(&token);
    let expires_at = chrono::Utc::now() + chrono::Duration::days(SESSION_TTL_DAYS);
    Session::create(pool, user.id, &token_hash, expires_at).await?;
    User::touch_last_login(pool, user.id).await?;

    tracing::info!("user '{}' logged in", user.username);

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        AUTH_TOKEN_COOKIE,
        token,
        SESSION_TTL_DAYS * 24 * 60 * 60
    );
    let profile = UserProfile {
        id: user.id.to_string(),
        username: user.username,
        is_admin: user.is_admin,
    };

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        ResponseJson(ApiResponse::success(profile)),
    )
        .into_response())
}

/// POST /api/auth/logout
///
/// Deletes the session (best effort) and clears the cookie.
pub async fn logout(
    State(deployment): State<DeploymentImpl>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if let Some(token) = auth_token_value(&headers) {
        let token_hash = AuthService::hash_session_token(&token);
        if let Err(e) = Session::delete_by_token_hash(&deployment.db().pool, &token_hash).await {
            tracing::warn!("failed to delete session on logout: {}", e);
        }
    }

    let cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        AUTH_TOKEN_COOKIE
    );
    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        ResponseJson(ApiResponse::success(())),
    )
        .into_response())
}

/// GET /api/auth/me
///
/// Unlike the gate, this does resolve the token against the session store:
/// the dashboard shell uses it to show who is signed in.
pub async fn me(
    State(deployment): State<DeploymentImpl>,
    headers: HeaderMap,
) -> Result<ResponseJson<ApiResponse<UserProfile>>, ApiError> {
    let token = auth_token_value(&headers)
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;
    let token_hash = AuthService::hash_session_token(&token);

    let user = Session::find_user(&deployment.db().pool, &token_hash)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

    Ok(ResponseJson(ApiResponse::success(UserProfile {
        id: user.id.to_string(),
        username: user.username,
        is_admin: user.is_admin,
    })))
}

/// Value of the `auth-token` cookie, if any.
fn auth_token_value(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    cookie_header.split(';').find_map(|cookie| {
        cookie
            .trim()
            .split_once('=')
            .and_then(|(name, value)| (name == AUTH_TOKEN_COOKIE).then(|| value.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_token_value_parses_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "theme=dark; auth-token=abc-123; lang=en".parse().unwrap(),
        );
        assert_eq!(auth_token_value(&headers).as_deref(), Some("abc-123"));

        let mut other = HeaderMap::new();
        other.insert(header::COOKIE, "theme=dark".parse().unwrap());
        assert_eq!(auth_token_value(&other), None);
    }
}
