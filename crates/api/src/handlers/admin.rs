//! Admin login.

use ahlam_core::error::CoreError;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::issue_admin_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Subject written into admin tokens. The dashboard has one shared account.
const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// POST /admin/login -- exchange the admin password for an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if !state.credentials.verify(&input.password) {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let issued = issue_admin_token(ADMIN_SUBJECT, &state.config.jwt)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(expires_in = issued.expires_in, "Admin logged in");
    Ok(Json(LoginResponse {
        access_token: issued.token,
        expires_in: issued.expires_in,
    }))
}
