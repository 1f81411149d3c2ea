//! Route definitions for bookings.
//!
//! Mounted at `/bookings` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Booking routes.
///
/// ```text
/// POST   /                  -> submit_booking (public)
/// GET    /                  -> list_bookings (admin only)
/// GET    /{id}              -> get_booking (admin only)
/// PUT    /{id}              -> update_booking_status (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(bookings::submit_booking).get(bookings::list_bookings),
        )
        .route(
            "/{id}",
            get(bookings::get_booking).put(bookings::update_booking_status),
        )
}
