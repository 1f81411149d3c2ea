//! The persistence boundary between workflow logic and the physical store.
//!
//! Every backend (PostgreSQL, local JSON file, in-memory, remote HTTP)
//! implements [`Store`]. Workflows hold an `Arc<dyn Store>` and never know
//! which one they are talking to.

pub mod memory;

use async_trait::async_trait;

use crate::booking::{Booking, BookingStatus, NewBooking};
use crate::error::CoreError;
use crate::menu::{MenuItem, NewMenuItem};
use crate::types::RecordId;

pub use memory::MemoryStore;

/// Storage contract for bookings and menu items.
///
/// Any method may fail with [`CoreError::Unavailable`]; a failed call
/// leaves no partial write behind.
#[async_trait]
pub trait Store: Send + Sync {
    /// All bookings, in whatever order the backend keeps them.
    async fn list_bookings(&self) -> Result<Vec<Booking>, CoreError>;

    async fn find_booking(&self, id: RecordId) -> Result<Option<Booking>, CoreError>;

    /// Persist a new booking with a fresh id, `pending` status and the
    /// current time as `created_at`.
    async fn create_booking(&self, input: NewBooking) -> Result<Booking, CoreError>;

    /// Set the status of booking `id` to `status`, but only if it is
    /// currently `expected`. The compare and the write are one atomic step.
    ///
    /// Fails with `NotFound` for an unknown id and `AlreadyDecided` when the
    /// current status is not `expected`.
    async fn set_booking_status(
        &self,
        id: RecordId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Booking, CoreError>;

    /// All menu items. Seeding backends populate the default catalog on
    /// the first-ever read.
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, CoreError>;

    async fn create_menu_item(&self, input: NewMenuItem) -> Result<MenuItem, CoreError>;

    /// Overwrite an existing item. Fails with `NotFound` if `item.id` is absent.
    async fn update_menu_item(&self, item: MenuItem) -> Result<MenuItem, CoreError>;

    /// Delete an item. Deleting an unknown id is not an error.
    async fn delete_menu_item(&self, id: RecordId) -> Result<(), CoreError>;

    /// Check whether the backing medium is reachable.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Shared conditional-transition check for backends that hold the record in
/// memory while deciding.
pub fn apply_transition(
    booking: &mut Booking,
    expected: BookingStatus,
    status: BookingStatus,
) -> Result<(), CoreError> {
    if booking.status != expected {
        return Err(CoreError::AlreadyDecided {
            id: booking.id.to_string(),
            status: booking.status,
        });
    }
    booking.status = status;
    Ok(())
}
