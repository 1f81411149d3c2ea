//! HTTP client for the booking API.
//!
//! [`RemoteStore`] implements [`ahlam_core::store::Store`] against a running
//! `ahlam-api` server's raw `/store` routes, so a workflow built over it on
//! the client side runs against a remote deployment without the server
//! sending emails of its own.

pub mod api;
pub mod config;
pub mod remote_store;

pub use api::{ApiClient, ClientError};
pub use config::ClientConfig;
pub use remote_store::RemoteStore;
