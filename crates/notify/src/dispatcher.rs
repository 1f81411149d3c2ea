//! [`Notifier`] implementation that sends booking emails.

use ahlam_core::booking::{Booking, Decision};
use ahlam_core::notify::{Delivery, NotificationError, Notifier};
use async_trait::async_trait;

use crate::email::{EmailConfig, EmailDelivery};
use crate::templates;

/// Booking notifier over SMTP. Without a configured transport every send is
/// a logged no-op reported as [`Delivery::Skipped`].
pub struct EmailNotifier {
    delivery: Option<EmailDelivery>,
}

impl EmailNotifier {
    pub fn new(delivery: EmailDelivery) -> Self {
        Self {
            delivery: Some(delivery),
        }
    }

    pub fn disabled() -> Self {
        Self { delivery: None }
    }

    /// Build from [`EmailConfig::from_env`], falling back to
    /// [`disabled`](Self::disabled) with a warning.
    pub fn from_env() -> Self {
        match EmailConfig::from_env() {
            Some(config) => {
                tracing::info!(
                    smtp_host = %config.smtp_host,
                    admin_email = config.admin_email.is_some(),
                    "Email notifications enabled",
                );
                Self::new(EmailDelivery::new(config))
            }
            None => {
                tracing::warn!("EMAIL_USER or EMAIL_PASS not set; email notifications disabled");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.delivery.is_some()
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify_admin(&self, booking: &Booking) {
        let Some(delivery) = &self.delivery else {
            tracing::info!(booking_id = %booking.id, "Admin email skipped: transport not configured");
            return;
        };
        let Some(admin_email) = delivery.config().admin_email.as_deref() else {
            tracing::info!(booking_id = %booking.id, "Admin email skipped: ADMIN_EMAIL not set");
            return;
        };

        let content = templates::new_booking_admin(booking);
        if let Err(e) = delivery.deliver(admin_email, &content).await {
            tracing::error!(
                booking_id = %booking.id,
                error = %e,
                "Failed to send new booking email to admin",
            );
        }
    }

    async fn notify_customer(
        &self,
        booking: &Booking,
        decision: Decision,
    ) -> Result<Delivery, NotificationError> {
        let Some(delivery) = &self.delivery else {
            tracing::warn!(
                booking_id = %booking.id,
                status = %booking.status,
                "Customer email skipped: transport not configured",
            );
            return Ok(Delivery::Skipped);
        };

        let content = templates::for_decision(booking, decision);
        delivery
            .deliver(&booking.email, &content)
            .await
            .map(|()| Delivery::Sent)
            .map_err(|e| {
                tracing::error!(
                    booking_id = %booking.id,
                    to = %booking.email,
                    error = %e,
                    "Failed to send customer email",
                );
                NotificationError(e.to_string())
            })
    }
}
