//! Admin authentication extractor for Axum handlers.

use ahlam_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::jwt::{verify_admin_token, TokenError};
use crate::error::AppError;
use crate::state::AppState;

/// Guards admin-only handlers. Holds the token subject.
///
/// ```ignore
/// async fn list(RequireAdmin(_admin): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub String);

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| unauthorized("Expected: Authorization: Bearer <token>"))?;

        match verify_admin_token(token, &state.config.jwt) {
            Ok(claims) => Ok(RequireAdmin(claims.sub)),
            Err(TokenError::Expired) => Err(unauthorized("Session expired, please log in again")),
            Err(TokenError::NotAdmin) => Err(unauthorized("Admin role required")),
            Err(_) => Err(unauthorized("Invalid or expired token")),
        }
    }
}
