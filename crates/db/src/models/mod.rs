//! Row types for the PostgreSQL tables and their conversion into domain
//! entities.

pub mod booking;
pub mod menu_item;
