//! In-memory [`Store`] backend.
//!
//! Used by tests and by the `memory` server backend. Optionally seeds the
//! default catalog on the first menu read, like the local file store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{apply_transition, Store};
use crate::booking::{Booking, BookingStatus, NewBooking};
use crate::error::CoreError;
use crate::menu::{default_catalog, MenuItem, NewMenuItem};
use crate::types::{new_record_id, now_millis, RecordId};

#[derive(Debug, Default)]
struct Collections {
    bookings: Vec<Booking>,
    /// `None` until the menu has been read or written once.
    menu: Option<Vec<MenuItem>>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
    seed_menu: bool,
}

impl MemoryStore {
    /// An empty store that never seeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that populates [`default_catalog`] on the first menu read.
    pub fn seeded() -> Self {
        Self {
            inner: RwLock::default(),
            seed_menu: true,
        }
    }

    fn menu_mut<'a>(&self, collections: &'a mut Collections) -> &'a mut Vec<MenuItem> {
        let seed = self.seed_menu;
        collections.menu.get_or_insert_with(|| {
            if seed {
                tracing::info!("Seeding default menu catalog");
                default_catalog()
                    .into_iter()
                    .map(|item| item.with_id(new_record_id()))
                    .collect()
            } else {
                Vec::new()
            }
        })
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_bookings(&self) -> Result<Vec<Booking>, CoreError> {
        Ok(self.inner.read().await.bookings.clone())
    }

    async fn find_booking(&self, id: RecordId) -> Result<Option<Booking>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, CoreError> {
        let booking = input.into_booking(new_record_id(), now_millis());
        self.inner.write().await.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn set_booking_status(
        &self,
        id: RecordId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Booking, CoreError> {
        let mut inner = self.inner.write().await;
        let booking = inner
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| CoreError::not_found("Booking", id))?;
        apply_transition(booking, expected, status)?;
        Ok(booking.clone())
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, CoreError> {
        let mut inner = self.inner.write().await;
        Ok(self.menu_mut(&mut inner).clone())
    }

    async fn create_menu_item(&self, input: NewMenuItem) -> Result<MenuItem, CoreError> {
        let item = input.with_id(new_record_id());
        let mut inner = self.inner.write().await;
        self.menu_mut(&mut inner).push(item.clone());
        Ok(item)
    }

    async fn update_menu_item(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let mut inner = self.inner.write().await;
        let slot = self
            .menu_mut(&mut inner)
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| CoreError::not_found("MenuItem", item.id))?;
        *slot = item.clone();
        Ok(item)
    }

    async fn delete_menu_item(&self, id: RecordId) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;
        self.menu_mut(&mut inner).retain(|item| item.id != id);
        Ok(())
    }
}
