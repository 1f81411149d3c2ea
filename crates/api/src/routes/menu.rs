//! Route definitions for the menu.
//!
//! Mounted at `/menu` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

/// Menu routes.
///
/// ```text
/// GET    /                  -> list_menu (public, ?category=)
/// POST   /                  -> create_menu_item (admin only)
/// PUT    /{id}              -> update_menu_item (admin only)
/// DELETE /{id}              -> delete_menu_item (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::list_menu).post(menu::create_menu_item))
        .route(
            "/{id}",
            put(menu::update_menu_item).delete(menu::delete_menu_item),
        )
}
