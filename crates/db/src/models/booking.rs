//! Row model for the `bookings` table.

use ahlam_core::booking::Booking;
use ahlam_core::error::CoreError;
use ahlam_core::types::{EpochMillis, RecordId};
use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

/// A row from the `bookings` table. `status` is kept as text in the database
/// and parsed on the way out.
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: i32,
    pub status: String,
    pub created_at: EpochMillis,
}

impl TryFrom<BookingRow> for Booking {
    type Error = CoreError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let status = row.status.parse().map_err(|_| {
            CoreError::Internal(format!(
                "booking {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;
        Ok(Booking {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            date: row.date,
            time: row.time,
            guests: row.guests,
            status,
            created_at: row.created_at,
        })
    }
}
