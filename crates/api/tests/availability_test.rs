mod test_utils;

use axum::http::StatusCode;
use chrono::Days;
use lawbook_api::handlers::availability::parse_date;
use lawbook_core::models::{
    booking::BookingStatus,
    response::ApiResponse,
    slot::{BookableDate, SlotListResponse},
};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::Value;
use uuid::Uuid;

use test_utils::{booking_from, booking_request, schedule, today, tomorrow, TestContext};

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2026-10-19").unwrap().to_string(), "2026-10-19");
    assert!(parse_date("19/10/2026").is_err());
    assert!(parse_date("2026-02-30").is_err());
}

#[tokio::test]
async fn test_malformed_date_is_rejected_before_lookup() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .get(&format!("/api/schedule/{}/slots", Uuid::new_v4()))
        .add_query_param("date", "tomorrow")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_missing_date_gets_error_envelope() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .get(&format!("/api/schedule/{}/slots", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("date"));
}

#[tokio::test]
async fn test_date_outside_window_is_rejected() {
    let mut ctx = TestContext::new();
    let lawyer_id = Uuid::new_v4();
    let saved = schedule(lawyer_id, None);
    ctx.store
        .expect_get_schedule()
        .returning(move |_| Ok(Some(saved.clone())));
    let far = today().checked_add_days(Days::new(30)).unwrap();

    let response = ctx
        .server()
        .get(&format!("/api/schedule/{}/slots", lawyer_id))
        .add_query_param("date", far.to_string())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("booking window"));
}

#[tokio::test]
async fn test_slots_mark_booked_hours_unavailable() {
    let mut ctx = TestContext::new();
    let lawyer_id = Uuid::new_v4();
    let date = tomorrow();
    let saved = schedule(lawyer_id, None);
    let taken = booking_from(
        &booking_request(lawyer_id, date, "10:00", "11:00"),
        BookingStatus::Confirmed,
    );
    ctx.store
        .expect_get_schedule()
        .with(eq(lawyer_id))
        .returning(move |_| Ok(Some(saved.clone())));
    ctx.store
        .expect_list_active_bookings_on()
        .with(eq(lawyer_id), eq(date))
        .times(1)
        .returning(move |_, _| Ok(vec![taken.clone()]));

    let response = ctx
        .server()
        .get(&format!("/api/schedule/{}/slots", lawyer_id))
        .add_query_param("date", date.to_string())
        .await;

    response.assert_status_ok();
    let body: ApiResponse<SlotListResponse> = response.json();
    let slots = body.data.unwrap().slots;
    assert_eq!(slots.len(), 9);
    assert_eq!(slots[0].id, format!("{}-08:00", date));
    let unavailable: Vec<_> = slots
        .iter()
        .filter(|s| !s.available)
        .map(|s| s.time.as_str())
        .collect();
    assert_eq!(unavailable, vec!["10:00 - 11:00"]);
}

#[tokio::test]
async fn test_lawyer_without_schedule_has_no_slots() {
    let mut ctx = TestContext::new();
    ctx.store.expect_get_schedule().returning(|_| Ok(None));

    let response = ctx
        .server()
        .get(&format!("/api/schedule/{}/slots", Uuid::new_v4()))
        .add_query_param("date", today().to_string())
        .await;

    response.assert_status_ok();
    let body: ApiResponse<SlotListResponse> = response.json();
    assert!(body.data.unwrap().slots.is_empty());
}

#[tokio::test]
async fn test_dates_cover_the_booking_window() {
    let mut ctx = TestContext::new();
    let lawyer_id = Uuid::new_v4();
    let saved = schedule(lawyer_id, None);
    ctx.store
        .expect_get_schedule()
        .returning(move |_| Ok(Some(saved.clone())));

    let response = ctx
        .server()
        .get(&format!("/api/schedule/{}/dates", lawyer_id))
        .await;

    response.assert_status_ok();
    let body: ApiResponse<Vec<BookableDate>> = response.json();
    let dates = body.data.unwrap();
    assert_eq!(dates.len(), 14);
    assert_eq!(dates[0].date, today());
    assert!(dates.iter().all(|d| d.active));
}

#[tokio::test]
async fn test_store_failure_is_an_internal_error() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_get_schedule()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let response = ctx
        .server()
        .get(&format!("/api/schedule/{}/dates", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["message"], "Internal server error");
}
