// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Booking, BookingStatus, DomainError, GuestCount, PaymentMethod, Room, RoomFilter,
    RoomTypeFilter, RoomType, User,
};

fn create_test_room(id: &str, room_type: RoomType, is_available: bool) -> Room {
    Room {
        id: String::from(id),
        title: format!("Room {id}"),
        description: String::from("Sea view"),
        price: 120.0,
        room_type,
        images: vec![String::from("https://img.example/1.jpg")],
        is_available,
    }
}

#[test]
fn test_guest_count_bounds() {
    assert_eq!(GuestCount::new(1).unwrap().value(), 1);
    assert_eq!(GuestCount::new(10).unwrap().value(), 10);
    assert!(matches!(
        GuestCount::new(0),
        Err(DomainError::InvalidGuestCount { count: 0, .. })
    ));
    assert!(matches!(
        GuestCount::new(11),
        Err(DomainError::InvalidGuestCount { count: 11, .. })
    ));
    assert!(GuestCount::new(-3).is_err());
    assert!(GuestCount::new(i64::from(u8::MAX) + 1).is_err());
}

#[test]
fn test_guest_count_default_is_one() {
    assert_eq!(GuestCount::default().value(), 1);
}

#[test]
fn test_guest_count_serde() {
    let count: GuestCount = serde_json::from_str("4").unwrap();
    assert_eq!(count.value(), 4);
    assert_eq!(serde_json::to_string(&count).unwrap(), "4");
    assert!(serde_json::from_str::<GuestCount>("12").is_err());
}

#[test]
fn test_payment_method_parsing() {
    assert_eq!(
        "Credit Card".parse::<PaymentMethod>().unwrap(),
        PaymentMethod::CreditCard
    );
    assert_eq!(
        "debit-card".parse::<PaymentMethod>().unwrap(),
        PaymentMethod::DebitCard
    );
    assert_eq!("paypal".parse::<PaymentMethod>().unwrap(), PaymentMethod::PayPal);
    assert_eq!(
        "pay_at_hotel".parse::<PaymentMethod>().unwrap(),
        PaymentMethod::PayAtHotel
    );
    assert!("cash".parse::<PaymentMethod>().is_err());
    assert_eq!(PaymentMethod::default(), PaymentMethod::CreditCard);
}

#[test]
fn test_payment_method_wire_form() {
    assert_eq!(
        serde_json::to_string(&PaymentMethod::PayAtHotel).unwrap(),
        "\"Pay at Hotel\""
    );
}

#[test]
fn test_room_type_parsing() {
    assert_eq!("Suite".parse::<RoomType>().unwrap(), RoomType::Suite);
    assert!(matches!(
        "villa".parse::<RoomType>(),
        Err(DomainError::InvalidRoomType(_))
    ));
}

#[test]
fn test_room_deserializes_backend_shape() {
    let json = r#"{
        "_id": "65f0c0ffee",
        "title": "Ocean Suite",
        "description": "Top floor",
        "price": 250.5,
        "type": "suite",
        "images": ["a.jpg", "b.jpg"]
    }"#;
    let room: Room = serde_json::from_str(json).unwrap();
    assert_eq!(room.id, "65f0c0ffee");
    assert_eq!(room.room_type, RoomType::Suite);
    assert_eq!(room.cover_image(), Some("a.jpg"));
    assert!(room.is_available, "availability defaults to true");
    assert!((room.nightly_rate().unwrap().amount() - 250.5).abs() < f64::EPSILON);
}

#[test]
fn test_room_with_negative_price_has_no_rate() {
    let mut room = create_test_room("r1", RoomType::Standard, true);
    room.price = -10.0;
    assert!(matches!(
        room.nightly_rate(),
        Err(DomainError::InvalidNightlyRate(_))
    ));
}

#[test]
fn test_booking_deserializes_backend_shape() {
    let json = r#"{
        "_id": "b1",
        "room_id": "r1",
        "room_title": "Ocean Suite",
        "user_email": "guest@example.com",
        "start_date": "2024-03-01",
        "end_date": "2024-03-04",
        "guest_name": "Ada",
        "guest_phone": "555-0100",
        "num_guests": 2,
        "payment_method": "PayPal",
        "total_price": 300,
        "status": "Checked In",
        "created_at": "2024-02-01T10:00:00Z"
    }"#;
    let booking: Booking = serde_json::from_str(json).unwrap();
    assert_eq!(booking.status, BookingStatus::CheckedIn);
    assert_eq!(booking.payment_method, PaymentMethod::PayPal);
    assert_eq!(booking.num_guests, 2);
    assert!(booking.is_active());
    assert!(booking.special_requests.is_empty());
}

#[test]
fn test_booking_minimal_shape_uses_defaults() {
    let json = r#"{
        "_id": "b2",
        "room_id": "r1",
        "start_date": "2024-03-01",
        "end_date": "2024-03-02",
        "status": "Cancelled"
    }"#;
    let booking: Booking = serde_json::from_str(json).unwrap();
    assert_eq!(booking.num_guests, 1);
    assert_eq!(booking.payment_method, PaymentMethod::CreditCard);
    assert!(!booking.is_active());
}

#[test]
fn test_booking_with_missing_or_unrecognised_status_still_decodes() {
    let json = r#"[
        {"_id": "b1", "room_id": "r1", "start_date": "2024-03-01", "end_date": "2024-03-02", "status": "Booked"},
        {"_id": "b2", "room_id": "r1", "start_date": "2024-03-01", "end_date": "2024-03-02"},
        {"_id": "b3", "room_id": "r1", "start_date": "2024-03-01", "end_date": "2024-03-02", "status": "No Show"}
    ]"#;
    let bookings: Vec<Booking> = serde_json::from_str(json).unwrap();
    let statuses: Vec<BookingStatus> = bookings.iter().map(|b| b.status).collect();
    assert_eq!(
        statuses,
        vec![
            BookingStatus::Booked,
            BookingStatus::Unknown,
            BookingStatus::Unknown
        ]
    );
    assert_eq!(bookings.iter().filter(|b| b.is_active()).count(), 1);
}

#[test]
fn test_room_with_missing_or_unrecognised_type_still_decodes() {
    let json = r#"[
        {"_id": "r1", "title": "A", "price": 100, "type": "suite"},
        {"_id": "r2", "title": "B", "price": 100},
        {"_id": "r3", "title": "C", "price": 100, "type": "penthouse"}
    ]"#;
    let rooms: Vec<Room> = serde_json::from_str(json).unwrap();
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[1].room_type, RoomType::Unknown);
    assert_eq!(rooms[2].room_type, RoomType::Unknown);
    assert!("unknown".parse::<RoomType>().is_err());

    let suites = RoomFilter {
        room_type: RoomTypeFilter::Only(RoomType::Suite),
        available_only: false,
    };
    assert_eq!(suites.apply(&rooms).len(), 1);
    assert_eq!(RoomFilter::default().apply(&rooms).len(), 3);
}

#[test]
fn test_user_deserializes_backend_shape() {
    let json = r#"{"_id": "u1", "email": "admin@example.com", "is_admin": true}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert!(user.is_admin);
    assert!(user.name.is_empty());
    assert_eq!(user.created_at, None);
}

#[test]
fn test_room_filter_by_type_and_availability() {
    let rooms = vec![
        create_test_room("a", RoomType::Standard, true),
        create_test_room("b", RoomType::Suite, true),
        create_test_room("c", RoomType::Suite, false),
        create_test_room("d", RoomType::Deluxe, true),
    ];

    let any = RoomFilter::default();
    assert_eq!(any.apply(&rooms).len(), 4);

    let suites = RoomFilter {
        room_type: RoomTypeFilter::Only(RoomType::Suite),
        available_only: false,
    };
    let ids: Vec<&str> = suites.apply(&rooms).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);

    let open_suites = RoomFilter {
        room_type: RoomTypeFilter::Only(RoomType::Suite),
        available_only: true,
    };
    let ids: Vec<&str> = open_suites
        .apply(&rooms)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn test_room_type_filter_parsing() {
    assert_eq!("any".parse::<RoomTypeFilter>().unwrap(), RoomTypeFilter::Any);
    assert_eq!(
        "deluxe".parse::<RoomTypeFilter>().unwrap(),
        RoomTypeFilter::Only(RoomType::Deluxe)
    );
    assert!("castle".parse::<RoomTypeFilter>().is_err());
}
