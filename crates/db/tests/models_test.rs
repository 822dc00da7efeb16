use chrono::{NaiveDate, Utc};
use lawbook_core::models::{
    availability::{Weekday, WeeklyAvailability},
    booking::{BookingStatus, BookingType},
    schedule::LawyerSchedule,
};
use lawbook_db::{
    models::{DbBooking, DbSchedule},
    repositories::schedule::verify_hash,
};
use pretty_assertions::assert_eq;
use sqlx::types::Json;
use uuid::Uuid;

fn row() -> DbBooking {
    DbBooking {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        lawyer_id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        price: 2000,
        booking_type: "home".to_string(),
        address_meeting: Some("12 Le Loi".to_string()),
        actual_phone: "0912345678".to_string(),
        documents: Json(vec!["https://files.example/contract.pdf".to_string()]),
        note: None,
        status: "confirmed".to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn test_booking_row_converts_to_domain() {
    let row = row();
    let id = row.id;

    let booking = row.into_booking().unwrap();

    assert_eq!(booking.id, id);
    assert_eq!(booking.time_slot.to_string(), "09:00 - 10:00");
    assert_eq!(booking.booking_type, BookingType::Home);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.documents.len(), 1);
}

#[test]
fn test_corrupt_booking_row_is_an_error() {
    let mut bad_time = row();
    bad_time.start_time = "9am".to_string();
    assert!(bad_time.into_booking().is_err());

    let mut bad_status = row();
    bad_status.status = "archived".to_string();
    assert!(bad_status.into_booking().is_err());
}

#[test]
fn test_schedule_row_converts_to_domain() {
    let mut availability = WeeklyAvailability::default();
    availability.toggle_day(Weekday::Friday);
    let now = Utc::now();
    let row = DbSchedule {
        lawyer_id: Uuid::new_v4(),
        availability: Json(availability.clone()),
        password_hash: None,
        timezone: "Asia/Ho_Chi_Minh".to_string(),
        created_at: now,
        updated_at: now,
    };

    let schedule: LawyerSchedule = row.into();

    assert_eq!(schedule.availability, availability);
    assert!(schedule.password_hash.is_none());
}

#[test]
fn test_verify_hash_rejects_garbage_hash() {
    assert!(verify_hash("not-a-phc-string", "secret").is_err());
}
