//! Admin login handler.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tones_core::error::CoreError;
use tones_db::repositories::AdminUserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: tones_core::types::DbId,
    pub username: String,
}

/// POST /api/v1/auth/login
///
/// Verifies credentials and returns a signed access token, also set as a
/// `token` cookie for the browser-based admin surface. Unknown usernames
/// and wrong passwords are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    let user = AdminUserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        tracing::warn!(username = %input.username, "Failed login attempt");
        return Err(invalid());
    }

    let token = generate_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let max_age = state.config.jwt.access_token_expiry_hours * 3600;
    let cookie = format!("token={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");

    tracing::info!(user_id = user.id, username = %user.username, "Admin logged in");

    let body = LoginResponse {
        token,
        user: LoginUser {
            id: user.id,
            username: user.username,
        },
    };
    Ok(([(SET_COOKIE, cookie)], Json(body)))
}
