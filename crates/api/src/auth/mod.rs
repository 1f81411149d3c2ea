//! Authentication primitives for the admin dashboard.
//!
//! - [`password`] -- Argon2id hashing and the hashed admin credential.
//! - [`jwt`] -- access-token generation and validation.

pub mod jwt;
pub mod password;
