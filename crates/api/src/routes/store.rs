//! Route definitions for raw store access.
//!
//! Mounted at `/store` by `api_routes()`. Every route is admin only and
//! none of them send notifications.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::store;
use crate::state::AppState;

/// Store routes.
///
/// ```text
/// GET    /bookings              -> list_bookings
/// POST   /bookings              -> create_booking
/// GET    /bookings/{id}         -> find_booking
/// PUT    /bookings/{id}/status  -> set_booking_status (compare-and-set)
/// GET    /menu                  -> list_menu_items
/// POST   /menu                  -> create_menu_item
/// PUT    /menu/{id}             -> update_menu_item
/// DELETE /menu/{id}             -> delete_menu_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(store::list_bookings).post(store::create_booking),
        )
        .route("/bookings/{id}", get(store::find_booking))
        .route("/bookings/{id}/status", put(store::set_booking_status))
        .route(
            "/menu",
            get(store::list_menu_items).post(store::create_menu_item),
        )
        .route(
            "/menu/{id}",
            put(store::update_menu_item).delete(store::delete_menu_item),
        )
}
