pub mod admin;
pub mod bookings;
pub mod menu;
pub mod store;
