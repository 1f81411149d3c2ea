//! Email notifications for booking events.
//!
//! - [`EmailDelivery`]: SMTP transport built on `lettre`.
//! - [`templates`]: subject/body composition per event.
//! - [`EmailNotifier`]: the [`Notifier`](ahlam_core::notify::Notifier)
//!   used by the booking workflow. Without credentials it logs and skips.

pub mod dispatcher;
pub mod email;
pub mod templates;

pub use dispatcher::EmailNotifier;
pub use email::{EmailConfig, EmailDelivery, EmailError};
