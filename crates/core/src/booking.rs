//! Booking entity, status rules, and submission validation.
//!
//! A booking starts `pending` and is resolved exactly once by an admin
//! [`Decision`] to either `confirmed` or `declined`. Both resolved statuses
//! are terminal.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::restaurant::OPENING_HOUR;
use crate::types::{hhmm, EpochMillis, RecordId};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Declined,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Declined,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Declined => "declined",
        }
    }

    /// Confirmed and declined bookings can never change again.
    pub fn is_terminal(self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "declined" => Ok(BookingStatus::Declined),
            other => Err(CoreError::Validation(format!(
                "Invalid booking status '{other}'. Must be one of: pending, confirmed, declined"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// An admin action resolving a pending booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Decline,
}

impl Decision {
    /// The status a booking ends up in after this decision.
    pub fn target_status(self) -> BookingStatus {
        match self {
            Decision::Confirm => BookingStatus::Confirmed,
            Decision::Decline => BookingStatus::Declined,
        }
    }
}

impl TryFrom<BookingStatus> for Decision {
    type Error = CoreError;

    fn try_from(status: BookingStatus) -> Result<Self, Self::Error> {
        match status {
            BookingStatus::Confirmed => Ok(Decision::Confirm),
            BookingStatus::Declined => Ok(Decision::Decline),
            BookingStatus::Pending => Err(CoreError::Validation(
                "A booking can only be set to 'confirmed' or 'declined'".into(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub guests: i32,
    pub status: BookingStatus,
    pub created_at: EpochMillis,
}

/// Customer-supplied fields of a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub guests: i32,
}

impl NewBooking {
    /// Materialize the stored record. Every store goes through here so the
    /// initial status is always `pending`.
    pub fn into_booking(self, id: RecordId, created_at: EpochMillis) -> Booking {
        Booking {
            id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            guests: self.guests,
            status: BookingStatus::Pending,
            created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Largest party accepted through the booking form.
pub const MAX_GUESTS: i32 = 50;

/// Reject times before opening. Service runs until midnight, so every hour
/// from [`OPENING_HOUR`] onwards is bookable.
pub fn validate_service_time(time: NaiveTime) -> Result<(), CoreError> {
    if time.hour() < OPENING_HOUR {
        return Err(CoreError::InvalidTime(format!(
            "We open at {OPENING_HOUR}:00. Please choose a later time than {}",
            time.format("%H:%M")
        )));
    }
    Ok(())
}

pub fn validate_guests(guests: i32) -> Result<(), CoreError> {
    if !(1..=MAX_GUESTS).contains(&guests) {
        return Err(CoreError::Validation(format!(
            "Guest count must be between 1 and {MAX_GUESTS} (got {guests})"
        )));
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate a booking request and trim its free-text fields.
pub fn validate_new_booking(input: &mut NewBooking) -> Result<(), CoreError> {
    require_non_empty("fullName", &input.full_name)?;
    require_non_empty("email", &input.email)?;
    require_non_empty("phone", &input.phone)?;

    input.full_name = input.full_name.trim().to_string();
    input.email = input.email.trim().to_string();
    input.phone = input.phone.trim().to_string();

    if !input.email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{}' is not a valid email address",
            input.email
        )));
    }

    validate_guests(input.guests)?;
    validate_service_time(input.time)
}

/// Check that `booking` may still be decided.
pub fn ensure_pending(booking: &Booking) -> Result<(), CoreError> {
    if booking.status.is_terminal() {
        return Err(CoreError::AlreadyDecided {
            id: booking.id.to_string(),
            status: booking.status,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Admin ordering
// ---------------------------------------------------------------------------

/// Comparator for the admin booking list: pending bookings first, then
/// newest `created_at` first within each group.
pub fn admin_order(a: &Booking, b: &Booking) -> Ordering {
    let rank = |booking: &Booking| u8::from(booking.status.is_terminal());
    rank(a)
        .cmp(&rank(b))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Stable in-place sort by [`admin_order`].
pub fn sort_for_admin(bookings: &mut [Booking]) {
    bookings.sort_by(admin_order);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
