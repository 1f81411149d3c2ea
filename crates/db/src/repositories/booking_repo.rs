//! Repository for the `bookings` table.

use ahlam_core::booking::{BookingStatus, NewBooking};
use ahlam_core::types::{EpochMillis, RecordId};
use sqlx::PgPool;

use crate::models::booking::BookingRow;

/// Column list for `bookings` queries.
const COLUMNS: &str = "id, full_name, email, phone, date, time, guests, status, created_at";

/// Provides CRUD operations for bookings. Bookings are never deleted.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new `pending` booking, returning the full row.
    pub async fn create(
        pool: &PgPool,
        id: RecordId,
        created_at: EpochMillis,
        input: &NewBooking,
    ) -> Result<BookingRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings \
                (id, full_name, email, phone, date, time, guests, status, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookingRow>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.date)
            .bind(input.time)
            .bind(input.guests)
            .bind(BookingStatus::Pending.as_str())
            .bind(created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: RecordId) -> Result<Option<BookingRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, BookingRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every booking. No particular order; callers sort.
    pub async fn list(pool: &PgPool) -> Result<Vec<BookingRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings");
        sqlx::query_as::<_, BookingRow>(&query).fetch_all(pool).await
    }

    /// Set the status only if the row still has `expected`.
    ///
    /// Returns `None` when no row matched, either because the id is unknown
    /// or because another writer changed the status first.
    pub async fn update_status_if(
        pool: &PgPool,
        id: RecordId,
        expected: &str,
        new_status: &str,
    ) -> Result<Option<BookingRow>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $1 \
             WHERE id = $2 AND status = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookingRow>(&query)
            .bind(new_status)
            .bind(id)
            .bind(expected)
            .fetch_optional(pool)
            .await
    }
}
