//! Booking workflow: submission, admin decisions, and the admin list.

use std::sync::Arc;

use serde::Serialize;

use crate::booking::{
    ensure_pending, sort_for_admin, validate_new_booking, Booking, BookingStatus, Decision,
    NewBooking,
};
use crate::error::CoreError;
use crate::notify::{NotificationOutcome, Notifier};
use crate::store::Store;
use crate::types::RecordId;

/// Result of a successful decision. The status change is durable even when
/// `notification` reports a failure.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionOutcome {
    #[serde(flatten)]
    pub booking: Booking,
    pub notification: NotificationOutcome,
}

/// Mediates every booking state change and couples the customer
/// notification 1:1 with a successful transition.
pub struct BookingWorkflow {
    store: Arc<dyn Store>,
    notifier: Arc<dyn Notifier>,
}

impl BookingWorkflow {
    pub fn new(store: Arc<dyn Store>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Validate and persist a booking request, then notify the restaurant in
    /// the background.
    pub async fn submit(&self, mut input: NewBooking) -> Result<Booking, CoreError> {
        validate_new_booking(&mut input)?;

        let booking = self.store.create_booking(input).await?;
        tracing::info!(
            booking_id = %booking.id,
            guests = booking.guests,
            date = %booking.date,
            "New booking request",
        );

        let notifier = Arc::clone(&self.notifier);
        let created = booking.clone();
        tokio::spawn(async move {
            notifier.notify_admin(&created).await;
        });

        Ok(booking)
    }

    /// Resolve a pending booking and email the customer.
    pub async fn decide(
        &self,
        id: RecordId,
        decision: Decision,
    ) -> Result<DecisionOutcome, CoreError> {
        let current = self
            .store
            .find_booking(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Booking", id))?;
        ensure_pending(&current)?;

        // The store re-checks `pending` atomically, so a concurrent decision
        // that won the race surfaces here as `AlreadyDecided`.
        let booking = self
            .store
            .set_booking_status(id, BookingStatus::Pending, decision.target_status())
            .await?;

        tracing::info!(
            booking_id = %id,
            from = %current.status,
            to = %booking.status,
            "Booking status updated",
        );

        let notification =
            NotificationOutcome::from(self.notifier.notify_customer(&booking, decision).await);
        if let NotificationOutcome::Failed { reason } = &notification {
            tracing::warn!(
                booking_id = %id,
                error = %reason,
                "Customer notification failed; status change kept",
            );
        }

        Ok(DecisionOutcome {
            booking,
            notification,
        })
    }

    /// All bookings, pending first, newest first within each group.
    pub async fn list_for_admin(&self) -> Result<Vec<Booking>, CoreError> {
        let mut bookings = self.store.list_bookings().await?;
        sort_for_admin(&mut bookings);
        Ok(bookings)
    }

    pub async fn get(&self, id: RecordId) -> Result<Booking, CoreError> {
        self.store
            .find_booking(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Booking", id))
    }
}
