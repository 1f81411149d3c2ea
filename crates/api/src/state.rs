use std::sync::Arc;

use ahlam_core::credentials::CredentialCheck;
use ahlam_core::notify::Notifier;
use ahlam_core::store::Store;
use ahlam_core::workflow::{BookingWorkflow, MenuCatalog};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The configured persistence backend.
    pub store: Arc<dyn Store>,
    pub bookings: Arc<BookingWorkflow>,
    pub catalog: Arc<MenuCatalog>,
    /// Verifies the admin password on login.
    pub credentials: Arc<dyn CredentialCheck>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the workflows over one store and one notifier.
    pub fn new(
        store: Arc<dyn Store>,
        notifier: Arc<dyn Notifier>,
        credentials: Arc<dyn CredentialCheck>,
        config: ServerConfig,
    ) -> Self {
        Self {
            bookings: Arc::new(BookingWorkflow::new(Arc::clone(&store), notifier)),
            catalog: Arc::new(MenuCatalog::new(Arc::clone(&store))),
            store,
            credentials,
            config: Arc::new(config),
        }
    }
}
