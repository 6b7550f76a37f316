// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hotel_booking_domain::PaymentMethod;
use time::OffsetDateTime;

/// The contents of a booking form before submission.
///
/// A draft is transient: it is created when a guest opens the form and
/// discarded once it is submitted or abandoned. It is never persisted.
///
/// Free-text fields are kept exactly as typed; trimming and defaulting happen
/// in [`build_booking_request`](crate::build_booking_request).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingDraft {
    /// The room being booked.
    pub room_id: String,
    /// Check-in, if chosen.
    pub start_date: Option<OffsetDateTime>,
    /// Check-out, if chosen.
    pub end_date: Option<OffsetDateTime>,
    /// Lead guest name.
    pub guest_name: String,
    /// Lead guest phone.
    pub guest_phone: String,
    /// Party size as entered. Coerced to an integer when the request is built.
    pub num_guests: Option<String>,
    /// Optional free-form requests.
    pub special_requests: Option<String>,
    /// Chosen payment method, if any.
    pub payment_method: Option<PaymentMethod>,
}

impl BookingDraft {
    /// Starts a draft for the given room with every other field blank.
    #[must_use]
    pub fn for_room(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            ..Self::default()
        }
    }
}
