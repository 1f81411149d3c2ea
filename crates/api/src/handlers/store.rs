//! Raw store access for remote tooling.
//!
//! These handlers read and write the configured [`Store`] directly. They
//! skip the booking workflow, so nothing here sends an email: a client that
//! runs its own workflow over `ahlam_client::RemoteStore` does the notifying.
//!
//! [`Store`]: ahlam_core::store::Store

use ahlam_core::booking::{BookingStatus, NewBooking};
use ahlam_core::error::CoreError;
use ahlam_core::menu::{MenuItem, NewMenuItem};
use ahlam_core::types::RecordId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// Request body for `PUT /store/bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusTransition {
    pub expected: BookingStatus,
    pub status: BookingStatus,
}

pub async fn list_bookings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(state.store.list_bookings().await?))
}

pub async fn find_booking(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    let booking = state
        .store
        .find_booking(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Booking", id))?;
    Ok(Json(booking))
}

pub async fn create_booking(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<NewBooking>,
) -> AppResult<impl IntoResponse> {
    let booking = state.store.create_booking(input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Compare-and-set on the booking status.
pub async fn set_booking_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(input): Json<StatusTransition>,
) -> AppResult<impl IntoResponse> {
    let booking = state
        .store
        .set_booking_status(id, input.expected, input.status)
        .await?;
    Ok(Json(booking))
}

pub async fn list_menu_items(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(state.store.list_menu_items().await?))
}

pub async fn create_menu_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<NewMenuItem>,
) -> AppResult<impl IntoResponse> {
    let item = state.store.create_menu_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// The path id wins over any `id` in the body.
pub async fn update_menu_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(item): Json<MenuItem>,
) -> AppResult<impl IntoResponse> {
    let item = state.store.update_menu_item(MenuItem { id, ..item }).await?;
    Ok(Json(item))
}

pub async fn delete_menu_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_menu_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
