//! PostgreSQL-backed [`Store`].

use ahlam_core::booking::{Booking, BookingStatus, NewBooking};
use ahlam_core::error::CoreError;
use ahlam_core::menu::{MenuItem, NewMenuItem};
use ahlam_core::store::Store;
use ahlam_core::types::{new_record_id, now_millis, RecordId};
use async_trait::async_trait;

use crate::repositories::{BookingRepo, MenuItemRepo};
use crate::DbPool;

/// Production store. Assumes the menu is populated server-side and never
/// seeds it.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Every database failure reaches callers as `Unavailable`; details stay in
/// the log.
fn unavailable(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Unavailable("database request failed".into())
}

#[async_trait]
impl Store for PgStore {
    async fn list_bookings(&self) -> Result<Vec<Booking>, CoreError> {
        BookingRepo::list(&self.pool)
            .await
            .map_err(unavailable)?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }

    async fn find_booking(&self, id: RecordId) -> Result<Option<Booking>, CoreError> {
        BookingRepo::find_by_id(&self.pool, id)
            .await
            .map_err(unavailable)?
            .map(Booking::try_from)
            .transpose()
    }

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, CoreError> {
        let row = BookingRepo::create(&self.pool, new_record_id(), now_millis(), &input)
            .await
            .map_err(unavailable)?;
        Booking::try_from(row)
    }

    async fn set_booking_status(
        &self,
        id: RecordId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Booking, CoreError> {
        let updated =
            BookingRepo::update_status_if(&self.pool, id, expected.as_str(), status.as_str())
                .await
                .map_err(unavailable)?;

        if let Some(row) = updated {
            return Booking::try_from(row);
        }

        // Nothing matched: tell apart an unknown id from a lost race.
        match self.find_booking(id).await? {
            None => Err(CoreError::not_found("Booking", id)),
            Some(current) => Err(CoreError::AlreadyDecided {
                id: id.to_string(),
                status: current.status,
            }),
        }
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, CoreError> {
        MenuItemRepo::list(&self.pool)
            .await
            .map_err(unavailable)?
            .into_iter()
            .map(MenuItem::try_from)
            .collect()
    }

    async fn create_menu_item(&self, input: NewMenuItem) -> Result<MenuItem, CoreError> {
        let row = MenuItemRepo::create(&self.pool, new_record_id(), &input)
            .await
            .map_err(unavailable)?;
        MenuItem::try_from(row)
    }

    async fn update_menu_item(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        MenuItemRepo::update(&self.pool, &item)
            .await
            .map_err(unavailable)?
            .ok_or_else(|| CoreError::not_found("MenuItem", item.id))
            .and_then(MenuItem::try_from)
    }

    async fn delete_menu_item(&self, id: RecordId) -> Result<(), CoreError> {
        let removed = MenuItemRepo::delete(&self.pool, id)
            .await
            .map_err(unavailable)?;
        if !removed {
            tracing::debug!(menu_item_id = %id, "Delete of absent menu item ignored");
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(unavailable)
    }
}
