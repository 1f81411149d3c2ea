//! Handlers for the public menu and its admin management.

use ahlam_core::menu::{MenuCategory, NewMenuItem};
use ahlam_core::types::RecordId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /menu`.
#[derive(Debug, Default, Deserialize)]
pub struct MenuListParams {
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /menu
// ---------------------------------------------------------------------------

/// List menu items, optionally restricted to one category.
pub async fn list_menu(
    State(state): State<AppState>,
    Query(params): Query<MenuListParams>,
) -> AppResult<impl IntoResponse> {
    let category = params
        .category
        .as_deref()
        .map(str::parse::<MenuCategory>)
        .transpose()?;

    let items = state.catalog.list(category).await?;
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// POST /menu
// ---------------------------------------------------------------------------

pub async fn create_menu_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<NewMenuItem>,
) -> AppResult<impl IntoResponse> {
    let item = state.catalog.add(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// ---------------------------------------------------------------------------
// PUT /menu/{id}
// ---------------------------------------------------------------------------

/// Replace a menu item. The path id wins over any `id` in the body.
pub async fn update_menu_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(input): Json<NewMenuItem>,
) -> AppResult<impl IntoResponse> {
    let item = state.catalog.edit(input.with_id(id)).await?;
    Ok(Json(item))
}

// ---------------------------------------------------------------------------
// DELETE /menu/{id}
// ---------------------------------------------------------------------------

pub async fn delete_menu_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    state.catalog.remove(id).await?;
    Ok(Json(json!({ "message": "Deleted" })))
}
