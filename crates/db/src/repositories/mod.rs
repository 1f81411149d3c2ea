//! Table-level query functions over a [`PgPool`](sqlx::PgPool).

pub mod booking_repo;
pub mod menu_item_repo;

pub use booking_repo::BookingRepo;
pub use menu_item_repo::MenuItemRepo;
