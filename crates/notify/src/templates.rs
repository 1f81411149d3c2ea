//! Fixed email templates keyed by booking event.

use ahlam_core::booking::{Booking, Decision};
use ahlam_core::restaurant::{ADDRESS, NAME, PHONE, SENDER_NAME};

/// A composed email, ready for any transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

/// Escape the few characters that matter inside HTML text nodes.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn when(booking: &Booking) -> String {
    format!(
        "{} at {}",
        booking.date.format("%Y-%m-%d"),
        booking.time.format("%H:%M")
    )
}

/// Customer email for a decided booking.
pub fn for_decision(booking: &Booking, decision: Decision) -> EmailContent {
    match decision {
        Decision::Confirm => confirmation(booking),
        Decision::Decline => declined(booking),
    }
}

pub fn confirmation(booking: &Booking) -> EmailContent {
    EmailContent {
        subject: format!("Booking Confirmed - {SENDER_NAME}"),
        html: format!(
            "<h3>Your Booking is Confirmed</h3>\n\
             <p>Dear {name},</p>\n\
             <p>We look forward to welcoming you.</p>\n\
             <p><strong>Date:</strong> {when}</p>\n\
             <p><strong>Guests:</strong> {guests}</p>\n\
             <p>Address: {ADDRESS}</p>\n",
            name = escape_html(&booking.full_name),
            when = when(booking),
            guests = booking.guests,
        ),
    }
}

pub fn declined(booking: &Booking) -> EmailContent {
    EmailContent {
        subject: format!("Update regarding your booking - {SENDER_NAME}"),
        html: format!(
            "<h3>Booking Status Update</h3>\n\
             <p>Dear {name},</p>\n\
             <p>Unfortunately, we cannot fulfill your request for {when}.</p>\n\
             <p>Please call us at {PHONE} to arrange an alternative time.</p>\n",
            name = escape_html(&booking.full_name),
            when = when(booking),
        ),
    }
}

/// Restaurant-facing notice of a new request.
pub fn new_booking_admin(booking: &Booking) -> EmailContent {
    EmailContent {
        subject: format!(
            "New booking request: {} for {}",
            booking.full_name, booking.guests
        ),
        html: format!(
            "<h3>New booking request at {NAME}</h3>\n\
             <p><strong>Name:</strong> {name}</p>\n\
             <p><strong>Email:</strong> {email}</p>\n\
             <p><strong>Phone:</strong> {phone}</p>\n\
             <p><strong>Date:</strong> {when}</p>\n\
             <p><strong>Guests:</strong> {guests}</p>\n\
             <p>Open the admin dashboard to confirm or decline.</p>\n",
            name = escape_html(&booking.full_name),
            email = escape_html(&booking.email),
            phone = escape_html(&booking.phone),
            when = when(booking),
            guests = booking.guests,
        ),
    }
}
