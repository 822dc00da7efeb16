use lawbook_core::{
    errors::LawbookError,
    models::availability::{DayAvailability, TimeRange, Weekday, WeeklyAvailability},
    validation::validate_availability,
};
use rstest::rstest;

fn week_with(day: Weekday, active: bool, ranges: &[(&str, &str)]) -> WeeklyAvailability {
    let mut week = WeeklyAvailability::default();
    let entry = week.0.iter_mut().find(|d| d.day == day).unwrap();
    entry.active = active;
    entry.slots = ranges
        .iter()
        .map(|(s, e)| TimeRange::parse(s, e).unwrap())
        .collect();
    week
}

fn validation_message(week: &WeeklyAvailability) -> String {
    match validate_availability(week) {
        Err(LawbookError::Validation(message)) => message,
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}

#[test]
fn test_default_week_is_valid() {
    assert!(validate_availability(&WeeklyAvailability::default()).is_ok());
}

#[test]
fn test_inactive_day_is_not_inspected() {
    let week = week_with(Weekday::Friday, false, &[("17:00", "08:00")]);

    assert!(validate_availability(&week).is_ok());
}

#[test]
fn test_active_day_needs_ranges() {
    let week = week_with(Weekday::Wednesday, true, &[]);

    assert!(validation_message(&week).contains("wednesday is active but has no time ranges"));
}

#[rstest]
#[case("09:00", "09:00")]
#[case("17:00", "08:00")]
fn test_start_must_precede_end(#[case] start: &str, #[case] end: &str) {
    let week = week_with(Weekday::Monday, true, &[(start, end)]);

    assert!(validation_message(&week).contains("must be before end time"));
}

#[rstest]
#[case(&[("08:00", "10:00"), ("09:00", "11:00")])]
#[case(&[("08:00", "12:00"), ("09:00", "10:00")])]
#[case(&[("13:00", "14:00"), ("08:00", "09:00"), ("13:30", "15:00")])]
fn test_overlapping_ranges_are_rejected(#[case] ranges: &[(&str, &str)]) {
    let week = week_with(Weekday::Thursday, true, ranges);

    assert!(validation_message(&week).contains("overlap"));
}

#[test]
fn test_touching_ranges_are_allowed() {
    let week = week_with(Weekday::Tuesday, true, &[("08:00", "10:00"), ("10:00", "12:00")]);

    assert!(validate_availability(&week).is_ok());
}

#[test]
fn test_duplicate_weekday_is_rejected() {
    let mut week = WeeklyAvailability::default();
    week.0.push(DayAvailability::inactive(Weekday::Sunday));

    assert!(validation_message(&week).contains("more than once"));
}

#[test]
fn test_editor_helpers_produce_a_valid_week() {
    let mut week = WeeklyAvailability::default();
    week.toggle_day(Weekday::Monday);
    week.toggle_day(Weekday::Saturday);
    week.remove_range(Weekday::Saturday, 0);
    week.add_range(Weekday::Saturday);

    let saturday = week.for_day(Weekday::Saturday).unwrap();
    assert_eq!(saturday.slots, vec![TimeRange::parse("08:00", "09:00").unwrap()]);
    assert!(validate_availability(&week).is_ok());

    // A second default range on Saturday collides with the first.
    week.add_range(Weekday::Saturday);
    assert!(validation_message(&week).contains("overlap"));
}

#[test]
fn test_toggle_off_keeps_ranges() {
    let mut week = WeeklyAvailability::default();
    week.toggle_day(Weekday::Monday);
    week.toggle_day(Weekday::Monday);

    let monday = week.for_day(Weekday::Monday).unwrap();
    assert!(!monday.active);
    assert_eq!(monday.slots.len(), 1);
    assert_eq!(week.remove_range(Weekday::Monday, 5), None);
}
