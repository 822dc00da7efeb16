use chrono::{NaiveDate, Utc};
use lawbook_core::{
    booking::{cancel, complete, confirm, validate_booking},
    errors::LawbookError,
    models::{
        availability::{TimeRange, Weekday, WeeklyAvailability},
        booking::{
            Booking, BookingStatus, BookingType, CreateBookingRequest, DEFAULT_PRICE,
            MAX_DOCUMENTS, MAX_PHONE_LEN,
        },
    },
};
use rstest::rstest;
use uuid::Uuid;

// Sunday; the lawyer works Mondays 08:00-17:00.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn availability() -> WeeklyAvailability {
    let mut week = WeeklyAvailability::default();
    week.toggle_day(Weekday::Monday);
    week
}

fn request(lawyer_id: Uuid, date: NaiveDate, start: &str, end: &str) -> CreateBookingRequest {
    CreateBookingRequest {
        user_id: Uuid::new_v4(),
        lawyer_id,
        date,
        time_slot: TimeRange::parse(start, end).unwrap(),
        price: DEFAULT_PRICE,
        booking_type: BookingType::Office,
        address_meeting: None,
        actual_phone: "0912345678".to_string(),
        documents: vec![],
        note: None,
    }
}

fn existing(request: &CreateBookingRequest, status: BookingStatus) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        lawyer_id: request.lawyer_id,
        date: request.date,
        time_slot: request.time_slot,
        price: request.price,
        booking_type: request.booking_type,
        address_meeting: None,
        actual_phone: "0987654321".to_string(),
        documents: vec![],
        note: None,
        status,
        created_at: Utc::now(),
    }
}

#[test]
fn test_offered_slot_is_accepted() {
    let req = request(Uuid::new_v4(), monday(), "09:00", "10:00");

    assert!(validate_booking(&req, today(), &availability(), &[]).is_ok());
}

#[test]
fn test_slot_not_offered_is_rejected() {
    let lawyer = Uuid::new_v4();
    let cases = [
        request(lawyer, monday(), "07:00", "08:00"),
        request(lawyer, monday(), "09:30", "10:30"),
        request(lawyer, monday(), "09:00", "11:00"),
        // Tuesday is off.
        request(lawyer, monday().succ_opt().unwrap(), "09:00", "10:00"),
    ];

    for req in cases {
        let result = validate_booking(&req, today(), &availability(), &[]);
        assert!(matches!(result, Err(LawbookError::Validation(_))), "{:?}", req.time_slot);
    }
}

#[test]
fn test_date_outside_window_is_rejected() {
    let req = request(Uuid::new_v4(), NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(), "09:00", "10:00");

    let result = validate_booking(&req, today(), &availability(), &[]);
    assert!(matches!(result, Err(LawbookError::Validation(msg)) if msg.contains("booking window")));
}

#[test]
fn test_phone_and_home_address_are_required() {
    let mut req = request(Uuid::new_v4(), monday(), "09:00", "10:00");
    req.actual_phone = "   ".to_string();
    assert!(validate_booking(&req, today(), &availability(), &[]).is_err());

    req.actual_phone = "0912345678".to_string();
    req.booking_type = BookingType::Home;
    assert!(validate_booking(&req, today(), &availability(), &[]).is_err());

    req.address_meeting = Some("12 Le Loi, District 1".to_string());
    assert!(validate_booking(&req, today(), &availability(), &[]).is_ok());
}

#[test]
fn test_phone_longer_than_column_is_rejected() {
    let mut req = request(Uuid::new_v4(), monday(), "09:00", "10:00");
    req.actual_phone = "9".repeat(MAX_PHONE_LEN);
    assert!(validate_booking(&req, today(), &availability(), &[]).is_ok());

    req.actual_phone = "9".repeat(MAX_PHONE_LEN + 1);
    let result = validate_booking(&req, today(), &availability(), &[]);
    assert!(matches!(result, Err(LawbookError::Validation(msg)) if msg.contains("Phone")));
}

#[test]
fn test_document_count_is_capped() {
    let mut req = request(Uuid::new_v4(), monday(), "09:00", "10:00");
    req.documents = (0..MAX_DOCUMENTS)
        .map(|i| format!("https://files.example/doc-{}.pdf", i))
        .collect();
    assert!(validate_booking(&req, today(), &availability(), &[]).is_ok());

    req.documents.push("https://files.example/extra.pdf".to_string());
    let result = validate_booking(&req, today(), &availability(), &[]);
    assert!(matches!(result, Err(LawbookError::Validation(msg)) if msg.contains("documents")));
}

#[test]
fn test_double_booking_is_a_conflict() {
    let req = request(Uuid::new_v4(), monday(), "09:00", "10:00");
    let taken = existing(&req, BookingStatus::Confirmed);

    let result = validate_booking(&req, today(), &availability(), &[taken]);
    assert!(matches!(result, Err(LawbookError::Conflict(_))));
}

#[test]
fn test_cancelled_booking_frees_the_slot() {
    let req = request(Uuid::new_v4(), monday(), "09:00", "10:00");
    let cancelled = existing(&req, BookingStatus::Cancelled);

    assert!(validate_booking(&req, today(), &availability(), &[cancelled]).is_ok());
}

#[test]
fn test_other_lawyers_bookings_do_not_conflict() {
    let req = request(Uuid::new_v4(), monday(), "09:00", "10:00");
    let other = existing(&request(Uuid::new_v4(), monday(), "09:00", "10:00"), BookingStatus::Pending);

    assert!(validate_booking(&req, today(), &availability(), &[other]).is_ok());
}

#[test]
fn test_cancel_transitions() {
    let req = request(Uuid::new_v4(), monday(), "09:00", "10:00");

    assert_eq!(cancel(&existing(&req, BookingStatus::Pending)).unwrap(), BookingStatus::Cancelled);
    assert_eq!(cancel(&existing(&req, BookingStatus::Confirmed)).unwrap(), BookingStatus::Cancelled);
    for status in [BookingStatus::Cancelled, BookingStatus::Completed] {
        assert!(matches!(
            cancel(&existing(&req, status)),
            Err(LawbookError::Validation(_))
        ));
    }
}

#[test]
fn test_lifecycle_moves_forward() {
    let req = request(Uuid::new_v4(), monday(), "09:00", "10:00");

    assert_eq!(confirm(&existing(&req, BookingStatus::Pending)).unwrap(), BookingStatus::Confirmed);
    assert_eq!(complete(&existing(&req, BookingStatus::Confirmed)).unwrap(), BookingStatus::Completed);
}

#[rstest]
#[case(BookingStatus::Confirmed)]
#[case(BookingStatus::Completed)]
#[case(BookingStatus::Cancelled)]
fn test_confirm_only_from_pending(#[case] status: BookingStatus) {
    let req = request(Uuid::new_v4(), monday(), "09:00", "10:00");

    let result = confirm(&existing(&req, status));
    assert!(matches!(result, Err(LawbookError::Validation(msg)) if msg.contains("cannot be confirmed")));
}

#[rstest]
#[case(BookingStatus::Pending)]
#[case(BookingStatus::Completed)]
#[case(BookingStatus::Cancelled)]
fn test_complete_only_from_confirmed(#[case] status: BookingStatus) {
    let req = request(Uuid::new_v4(), monday(), "09:00", "10:00");

    assert!(matches!(complete(&existing(&req, status)), Err(LawbookError::Validation(_))));
}
