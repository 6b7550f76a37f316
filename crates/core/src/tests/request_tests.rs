// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingRequest, CoreError, build_booking_request, coerce_guest_count};
use hotel_booking_domain::{DomainError, PaymentMethod};
use time::macros::datetime;

use super::helpers::{create_test_draft, create_test_rate};

#[test]
fn test_builds_canonical_request() {
    let request: BookingRequest =
        build_booking_request(&create_test_draft(), create_test_rate()).unwrap();

    assert_eq!(request.room_id, "room-101");
    assert_eq!(request.start_date, "2024-03-01");
    assert_eq!(request.end_date, "2024-03-04");
    assert_eq!(request.num_guests.value(), 2);
    assert_eq!(request.special_requests, "");
    assert_eq!(request.payment_method, PaymentMethod::CreditCard);
    assert_eq!(request.quote().nights, 3);
    assert!((request.quote().total - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_payload_shape_excludes_quote() {
    let request: BookingRequest =
        build_booking_request(&create_test_draft(), create_test_rate()).unwrap();
    let json: String = serde_json::to_string(&request).unwrap();

    assert_eq!(
        json,
        r#"{"room_id":"room-101","start_date":"2024-03-01","end_date":"2024-03-04","guest_name":"Ada Lovelace","guest_phone":"555-0100","num_guests":2,"special_requests":"","payment_method":"Credit Card"}"#
    );
}

#[test]
fn test_builder_is_idempotent() {
    let draft = create_test_draft();
    let first: Vec<u8> =
        serde_json::to_vec(&build_booking_request(&draft, create_test_rate()).unwrap()).unwrap();
    let second: Vec<u8> =
        serde_json::to_vec(&build_booking_request(&draft, create_test_rate()).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_text_fields_are_trimmed() {
    let mut draft = create_test_draft();
    draft.room_id = String::from("  room-101 ");
    draft.guest_name = String::from("\tAda Lovelace ");
    draft.special_requests = Some(String::from("  late arrival  "));
    draft.payment_method = Some(PaymentMethod::PayAtHotel);

    let request = build_booking_request(&draft, create_test_rate()).unwrap();
    assert_eq!(request.room_id, "room-101");
    assert_eq!(request.guest_name, "Ada Lovelace");
    assert_eq!(request.special_requests, "late arrival");
    assert_eq!(request.payment_method, PaymentMethod::PayAtHotel);
}

#[test]
fn test_invalid_range_reported_before_missing_fields() {
    let mut draft = create_test_draft();
    draft.end_date = draft.start_date;
    draft.guest_name = String::new();

    let err = build_booking_request(&draft, create_test_rate()).unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::InvalidRange { .. })
    ));
    assert_eq!(err.fields(), vec!["start_date", "end_date"]);
}

#[test]
fn test_missing_fields_reported_together() {
    let mut draft = create_test_draft();
    draft.guest_name = String::from("   ");
    draft.guest_phone = String::new();
    draft.end_date = None;

    let err = build_booking_request(&draft, create_test_rate()).unwrap_err();
    assert_eq!(
        err,
        CoreError::MissingFields(vec!["end_date", "guest_name", "guest_phone"])
    );
    assert_eq!(
        err.to_string(),
        "Please fill in the following required fields: end_date, guest_name, guest_phone"
    );
}

#[test]
fn test_missing_fields_reported_before_guest_count() {
    let mut draft = create_test_draft();
    draft.room_id = String::new();
    draft.num_guests = Some(String::from("11"));

    let err = build_booking_request(&draft, create_test_rate()).unwrap_err();
    assert_eq!(err, CoreError::MissingFields(vec!["room_id"]));
}

#[test]
fn test_guest_count_fallbacks() {
    assert_eq!(coerce_guest_count(None).unwrap().value(), 1);
    assert_eq!(coerce_guest_count(Some("0")).unwrap().value(), 1);
    assert_eq!(coerce_guest_count(Some("abc")).unwrap().value(), 1);
    assert_eq!(coerce_guest_count(Some("")).unwrap().value(), 1);
    assert_eq!(coerce_guest_count(Some(" 4 ")).unwrap().value(), 4);
    assert_eq!(coerce_guest_count(Some("10")).unwrap().value(), 10);
}

#[test]
fn test_guest_count_takes_leading_integer() {
    assert_eq!(coerce_guest_count(Some("2.5")).unwrap().value(), 2);
    assert_eq!(coerce_guest_count(Some("3 guests")).unwrap().value(), 3);
    assert_eq!(coerce_guest_count(Some(" 4x")).unwrap().value(), 4);
    assert_eq!(coerce_guest_count(Some("+5")).unwrap().value(), 5);
    assert_eq!(coerce_guest_count(Some("0.9")).unwrap().value(), 1);
    assert_eq!(coerce_guest_count(Some("x4")).unwrap().value(), 1);
    assert!(coerce_guest_count(Some("12 people")).is_err());
    assert!(coerce_guest_count(Some("99999999999999999999999")).is_err());

    let mut draft = create_test_draft();
    draft.num_guests = Some(String::from("3 guests"));
    let payload = serde_json::to_value(build_booking_request(&draft, create_test_rate()).unwrap())
        .unwrap();
    assert_eq!(payload["num_guests"], 3);
}

#[test]
fn test_guest_count_above_limit_rejected() {
    let err = coerce_guest_count(Some("11")).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidField {
            field: "num_guests",
            error: DomainError::InvalidGuestCount { count: 11, .. }
        }
    ));

    let mut draft = create_test_draft();
    draft.num_guests = Some(String::from("11"));
    let err = build_booking_request(&draft, create_test_rate()).unwrap_err();
    assert_eq!(err.fields(), vec!["num_guests"]);
}

#[test]
fn test_negative_guest_count_rejected() {
    assert!(coerce_guest_count(Some("-2")).is_err());
}

#[test]
fn test_partial_day_is_truncated_in_quote() {
    let mut draft = create_test_draft();
    draft.start_date = Some(datetime!(2024-03-01 14:00 UTC));
    draft.end_date = Some(datetime!(2024-03-04 11:00 UTC));

    let request = build_booking_request(&draft, create_test_rate()).unwrap();
    assert_eq!(request.quote().nights, 2);
    assert_eq!(request.start_date, "2024-03-01");
    assert_eq!(request.end_date, "2024-03-04");
}
