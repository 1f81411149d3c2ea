//! Notification seam between the booking workflow and email delivery.

use async_trait::async_trait;
use serde::Serialize;

use crate::booking::{Booking, Decision};

/// What happened to a notification that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// No transport is configured. Treated exactly like `Sent` by callers.
    Skipped,
}

/// A notification could not be delivered. Never fails the request that
/// triggered it.
#[derive(Debug, thiserror::Error)]
#[error("Notification failed: {0}")]
pub struct NotificationError(pub String);

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tell the restaurant about a new booking request. Best-effort: the
    /// implementation logs its own failures.
    async fn notify_admin(&self, booking: &Booking);

    /// Tell the customer how their booking was decided.
    async fn notify_customer(
        &self,
        booking: &Booking,
        decision: Decision,
    ) -> Result<Delivery, NotificationError>;
}

/// Notification result as reported back to the admin that made a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum NotificationOutcome {
    Sent,
    Skipped,
    Failed { reason: String },
}

impl NotificationOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, NotificationOutcome::Failed { .. })
    }
}

impl From<Result<Delivery, NotificationError>> for NotificationOutcome {
    fn from(result: Result<Delivery, NotificationError>) -> Self {
        match result {
            Ok(Delivery::Sent) => NotificationOutcome::Sent,
            Ok(Delivery::Skipped) => NotificationOutcome::Skipped,
            Err(e) => NotificationOutcome::Failed { reason: e.0 },
        }
    }
}
