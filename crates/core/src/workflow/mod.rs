//! Orchestration over a [`Store`](crate::store::Store) and a
//! [`Notifier`](crate::notify::Notifier).

pub mod booking;
pub mod catalog;

pub use booking::{BookingWorkflow, DecisionOutcome};
pub use catalog::MenuCatalog;
