//! Request extractors enforcing authentication.
//!
//! - [`auth::RequireAdmin`] -- Requires a valid admin Bearer token.

pub mod auth;
