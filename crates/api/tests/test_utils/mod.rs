#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{Days, NaiveDate, Utc};
use chrono_tz::Tz;
use lawbook_api::{app, ApiState};
use lawbook_core::{
    models::{
        availability::{DayAvailability, TimeRange, Weekday, WeeklyAvailability},
        booking::{Booking, BookingStatus, BookingType, CreateBookingRequest, DEFAULT_PRICE},
        schedule::LawyerSchedule,
    },
    window::today_in,
};
use lawbook_db::mock::repositories::MockStore;
use uuid::Uuid;

pub const TIMEZONE: Tz = chrono_tz::Asia::Ho_Chi_Minh;

pub struct TestContext {
    pub store: MockStore,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            store: MockStore::new(),
        }
    }

    /// Router backed by the mock store. Unexpected store calls panic.
    pub fn server(self) -> TestServer {
        let state = Arc::new(ApiState::new(Arc::new(self.store), TIMEZONE));
        TestServer::new(app(state)).unwrap()
    }
}

pub fn today() -> NaiveDate {
    today_in(TIMEZONE)
}

pub fn tomorrow() -> NaiveDate {
    today().checked_add_days(Days::new(1)).unwrap()
}

/// Every day active 08:00-17:00, so any date yields nine slots.
pub fn open_every_day() -> WeeklyAvailability {
    WeeklyAvailability(
        Weekday::ALL
            .into_iter()
            .map(|day| DayAvailability {
                day,
                active: true,
                slots: vec![TimeRange::parse("08:00", "17:00").unwrap()],
            })
            .collect(),
    )
}

pub fn schedule(lawyer_id: Uuid, password_hash: Option<String>) -> LawyerSchedule {
    let now = Utc::now();
    LawyerSchedule {
        lawyer_id,
        availability: open_every_day(),
        password_hash,
        timezone: TIMEZONE.name().to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn booking_request(lawyer_id: Uuid, date: NaiveDate, start: &str, end: &str) -> CreateBookingRequest {
    CreateBookingRequest {
        user_id: Uuid::new_v4(),
        lawyer_id,
        date,
        time_slot: TimeRange::parse(start, end).unwrap(),
        price: DEFAULT_PRICE,
        booking_type: BookingType::Office,
        address_meeting: Some("Firm office".to_string()),
        actual_phone: "0912345678".to_string(),
        documents: vec![],
        note: None,
    }
}

pub fn booking_from(request: &CreateBookingRequest, status: BookingStatus) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        user_id: request.user_id,
        lawyer_id: request.lawyer_id,
        date: request.date,
        time_slot: request.time_slot,
        price: request.price,
        booking_type: request.booking_type,
        address_meeting: request.address_meeting.clone(),
        actual_phone: request.actual_phone.clone(),
        documents: request.documents.clone(),
        note: request.note.clone(),
        status,
        created_at: Utc::now(),
    }
}
