pub mod admin;
pub mod bookings;
pub mod health;
pub mod menu;
pub mod store;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /menu                     list (public), create (admin)
/// /menu/{id}                update, delete (admin)
///
/// /bookings                 submit (public), list (admin)
/// /bookings/{id}            get, decide (admin)
///
/// /admin/login              exchange password for access token (public)
///
/// /store/...                raw store reads and writes, no notifications (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/menu", menu::router())
        .nest("/bookings", bookings::router())
        .nest("/admin", admin::router())
        .nest("/store", store::router())
}
