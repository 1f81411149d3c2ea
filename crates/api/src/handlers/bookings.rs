//! Handlers for booking requests and admin decisions.
//!
//! Submitting is public; everything else requires the admin token.

use ahlam_core::booking::{BookingStatus, Decision, NewBooking};
use ahlam_core::types::RecordId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// Request body for `PUT /bookings/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: String,
}

// ---------------------------------------------------------------------------
// POST /bookings
// ---------------------------------------------------------------------------

pub async fn submit_booking(
    State(state): State<AppState>,
    Json(input): Json<NewBooking>,
) -> AppResult<impl IntoResponse> {
    let booking = state.bookings.submit(input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

// ---------------------------------------------------------------------------
// GET /bookings
// ---------------------------------------------------------------------------

/// All bookings, pending first and newest first within each group.
pub async fn list_bookings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = state.bookings.list_for_admin().await?;
    Ok(Json(bookings))
}

// ---------------------------------------------------------------------------
// GET /bookings/{id}
// ---------------------------------------------------------------------------

pub async fn get_booking(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> AppResult<impl IntoResponse> {
    let booking = state.bookings.get(id).await?;
    Ok(Json(booking))
}

// ---------------------------------------------------------------------------
// PUT /bookings/{id}
// ---------------------------------------------------------------------------

/// Confirm or decline a pending booking.
///
/// The response carries the updated booking plus a `notification` field
/// reporting whether the customer email went out. A failed email never
/// fails the request.
pub async fn update_booking_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(input): Json<UpdateBookingStatus>,
) -> AppResult<impl IntoResponse> {
    let status: BookingStatus = input.status.parse()?;
    let decision = Decision::try_from(status)?;

    let outcome = state.bookings.decide(id, decision).await?;
    Ok(Json(outcome))
}
