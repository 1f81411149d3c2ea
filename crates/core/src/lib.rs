//! Domain model and workflows for the Ahlam restaurant booking service.
//!
//! - [`booking`] / [`menu`]: entities, validation, ordering, price rules.
//! - [`store`]: the [`Store`](store::Store) persistence contract and the
//!   in-memory backend.
//! - [`notify`]: the notification seam used by the booking workflow.
//! - [`workflow`]: [`BookingWorkflow`](workflow::BookingWorkflow) and
//!   [`MenuCatalog`](workflow::MenuCatalog).

pub mod booking;
pub mod credentials;
pub mod error;
pub mod menu;
pub mod notify;
pub mod restaurant;
pub mod store;
pub mod types;
pub mod workflow;
