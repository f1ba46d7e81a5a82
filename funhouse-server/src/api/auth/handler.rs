//! Staff login/logout handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

use crate::auth::{create_token, verify_password};
use crate::db;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub display_name: String,
    pub is_admin: bool,
}

/// POST /crm/login/
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = req.username.trim();
    let staff = db::staff::find_by_username(&state.pool, username)
        .await
        .map_err(AppError::from)?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&req.password, &staff.hashed_password) {
        return Err(AppError::invalid_credentials());
    }

    let token = create_token(&staff, &state.jwt_secret).map_err(|e| {
        tracing::error!("JWT creation failed: {e}");
        AppError::internal("Token creation failed")
    })?;

    tracing::info!(username = %staff.username, "Staff login");

    Ok(Json(LoginResponse {
        token,
        display_name: staff.display_name,
        is_admin: staff.is_admin,
    }))
}

/// POST /crm/logout/
///
/// Tokens are stateless; the client discards its copy. The endpoint exists
/// so the path contract holds.
pub async fn logout() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Logged out" }))
}
