//! Booking acceptance and status transitions.
//!
//! A booking moves `pending -> confirmed -> completed`, and may be cancelled
//! while it is pending or confirmed.

use chrono::NaiveDate;

use crate::{
    errors::{LawbookError, LawbookResult},
    models::{
        availability::WeeklyAvailability,
        booking::{
            Booking, BookingStatus, BookingType, CreateBookingRequest, MAX_DOCUMENTS,
            MAX_PHONE_LEN,
        },
    },
    slots::derive_slots_for_date,
    window::ensure_in_window,
};

/// Checks a booking request against the lawyer's availability and the
/// bookings they already hold.
///
/// `existing` may contain bookings for any date; only active bookings on the
/// requested date are considered.
///
/// # Errors
///
/// * `LawbookError::Validation` - date outside the window, missing or overlong
///   phone, missing home address, too many documents, or a time slot the
///   lawyer does not offer that day
/// * `LawbookError::Conflict` - the slot is already booked
pub fn validate_booking(
    request: &CreateBookingRequest,
    today: NaiveDate,
    availability: &WeeklyAvailability,
    existing: &[Booking],
) -> LawbookResult<()> {
    ensure_in_window(request.date, today)?;

    if request.actual_phone.trim().is_empty() {
        return Err(LawbookError::Validation(
            "A contact phone number is required".to_string(),
        ));
    }
    if request.actual_phone.chars().count() > MAX_PHONE_LEN {
        return Err(LawbookError::Validation(format!(
            "Phone number cannot be longer than {} characters",
            MAX_PHONE_LEN
        )));
    }

    if request.booking_type == BookingType::Home
        && request
            .address_meeting
            .as_deref()
            .map_or(true, |a| a.trim().is_empty())
    {
        return Err(LawbookError::Validation(
            "An address is required for home visits".to_string(),
        ));
    }

    if request.documents.len() > MAX_DOCUMENTS {
        return Err(LawbookError::Validation(format!(
            "At most {} documents can be attached, got {}",
            MAX_DOCUMENTS,
            request.documents.len()
        )));
    }

    if request.price < 0 {
        return Err(LawbookError::Validation("Price cannot be negative".to_string()));
    }

    let requested = request.time_slot;
    let offered = derive_slots_for_date(request.date, availability)
        .into_iter()
        .any(|slot| slot.start == requested.start && slot.end == requested.end);
    if !offered {
        return Err(LawbookError::Validation(format!(
            "The lawyer is not available on {} at {}",
            request.date, requested
        )));
    }

    let taken = existing.iter().any(|b| {
        b.lawyer_id == request.lawyer_id
            && b.date == request.date
            && b.status.is_active()
            && b.time_slot.overlaps(&requested)
    });
    if taken {
        return Err(LawbookError::Conflict(format!(
            "The slot {} on {} is already booked",
            requested, request.date
        )));
    }

    Ok(())
}

/// Lawyer accepts a pending booking.
pub fn confirm(booking: &Booking) -> LawbookResult<BookingStatus> {
    match booking.status {
        BookingStatus::Pending => Ok(BookingStatus::Confirmed),
        other => Err(invalid_transition(booking, other, "confirmed")),
    }
}

/// Lawyer marks a confirmed booking as held.
pub fn complete(booking: &Booking) -> LawbookResult<BookingStatus> {
    match booking.status {
        BookingStatus::Confirmed => Ok(BookingStatus::Completed),
        other => Err(invalid_transition(booking, other, "completed")),
    }
}

/// Moves a pending or confirmed booking to `Cancelled`.
pub fn cancel(booking: &Booking) -> LawbookResult<BookingStatus> {
    match booking.status {
        BookingStatus::Pending | BookingStatus::Confirmed => Ok(BookingStatus::Cancelled),
        BookingStatus::Cancelled => Err(LawbookError::Validation(format!(
            "Booking {} is already cancelled",
            booking.id
        ))),
        other => Err(invalid_transition(booking, other, "cancelled")),
    }
}

fn invalid_transition(booking: &Booking, from: BookingStatus, to: &str) -> LawbookError {
    LawbookError::Validation(format!(
        "Booking {} is {} and cannot be {}",
        booking.id, from, to
    ))
}
