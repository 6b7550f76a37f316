// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BookingDraft;
use hotel_booking_domain::{Booking, BookingStatus, NightlyRate, PaymentMethod};
use time::macros::datetime;

pub fn create_test_draft() -> BookingDraft {
    BookingDraft {
        room_id: String::from("room-101"),
        start_date: Some(datetime!(2024-03-01 0:00 UTC)),
        end_date: Some(datetime!(2024-03-04 0:00 UTC)),
        guest_name: String::from("Ada Lovelace"),
        guest_phone: String::from("555-0100"),
        num_guests: Some(String::from("2")),
        special_requests: None,
        payment_method: None,
    }
}

pub fn create_test_rate() -> NightlyRate {
    NightlyRate::new(100.0).unwrap()
}

pub fn create_test_booking(id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: String::from(id),
        room_id: String::from("room-101"),
        room_title: Some(String::from("Ocean Suite")),
        user_email: Some(String::from("guest@example.com")),
        start_date: String::from("2024-03-01"),
        end_date: String::from("2024-03-04"),
        guest_name: String::from("Ada Lovelace"),
        guest_phone: String::from("555-0100"),
        num_guests: 2,
        special_requests: String::new(),
        payment_method: PaymentMethod::CreditCard,
        total_price: 300.0,
        status,
        created_at: None,
    }
}
