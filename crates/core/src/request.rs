// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::BookingDraft;
use crate::error::CoreError;
use hotel_booking_domain::{
    GuestCount, NightlyRate, PaymentMethod, PriceQuote, StayRange, quote_stay,
    validate_date_range,
};
use serde::Serialize;

/// The canonical payload submitted to `POST /book`.
///
/// Field order is fixed, so serializing the same request always produces the
/// same bytes. The client-side price quote travels alongside for display but
/// is not sent; the backend computes its own total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    /// The room being booked.
    pub room_id: String,
    /// Check-in as `YYYY-MM-DD`.
    pub start_date: String,
    /// Check-out as `YYYY-MM-DD`.
    pub end_date: String,
    /// Trimmed lead guest name.
    pub guest_name: String,
    /// Trimmed lead guest phone.
    pub guest_phone: String,
    /// Party size.
    pub num_guests: GuestCount,
    /// Trimmed requests, empty when none were given.
    pub special_requests: String,
    /// Payment method.
    pub payment_method: PaymentMethod,
    #[serde(skip)]
    quote: PriceQuote,
}

impl BookingRequest {
    /// Returns the price the client expects for this stay.
    #[must_use]
    pub const fn quote(&self) -> &PriceQuote {
        &self.quote
    }
}

/// Reads the leading integer of `input`: optional whitespace, an optional
/// sign, then a run of ASCII digits. `"2.5"` reads as 2 and `"3 guests"` as 3.
///
/// Returns `None` when no digits follow. Runs too long for `i64` saturate.
fn leading_integer(input: &str) -> Option<i64> {
    let trimmed: &str = input.trim_start();
    let (negative, rest): (bool, &str) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Turns the raw party-size input into a guest count.
///
/// The leading integer of the input is used. Absent input, input with no
/// leading digits, and zero all fall back to a single guest. Any other
/// integer must lie within `[1, 10]`.
///
/// # Errors
///
/// Returns `CoreError::InvalidField` for `num_guests` when a parsed, non-zero
/// count is out of range.
pub fn coerce_guest_count(raw: Option<&str>) -> Result<GuestCount, CoreError> {
    let parsed: i64 = raw.and_then(leading_integer).unwrap_or(0);

    if parsed == 0 {
        return Ok(GuestCount::default());
    }

    GuestCount::new(parsed).map_err(|error| CoreError::InvalidField {
        field: "num_guests",
        error,
    })
}

/// Validates a draft and shapes it into a submission payload.
///
/// Checks run in a fixed order and the first failing step is reported:
/// 1. the date range, when both dates are chosen
/// 2. required fields (room, dates, guest name and phone), all reported together
/// 3. guest count coercion
///
/// Special requests default to an empty string and the payment method to
/// credit card. The function is pure: the same draft and rate always yield
/// an identical request.
///
/// # Arguments
///
/// * `draft` - The form contents
/// * `rate` - The room's nightly rate, used for the price quote
///
/// # Errors
///
/// Returns an error if:
/// - Check-out is not after check-in
/// - Any required field is empty after trimming
/// - The guest count is outside `[1, 10]`
pub fn build_booking_request(
    draft: &BookingDraft,
    rate: NightlyRate,
) -> Result<BookingRequest, CoreError> {
    let stay: Option<StayRange> = match (draft.start_date, draft.end_date) {
        (Some(start), Some(end)) => Some(validate_date_range(start, end)?),
        _ => None,
    };

    let room_id: &str = draft.room_id.trim();
    let guest_name: &str = draft.guest_name.trim();
    let guest_phone: &str = draft.guest_phone.trim();

    let mut missing: Vec<&'static str> = Vec::new();
    if room_id.is_empty() {
        missing.push("room_id");
    }
    if draft.start_date.is_none() {
        missing.push("start_date");
    }
    if draft.end_date.is_none() {
        missing.push("end_date");
    }
    if guest_name.is_empty() {
        missing.push("guest_name");
    }
    if guest_phone.is_empty() {
        missing.push("guest_phone");
    }

    let Some(stay) = stay.filter(|_| missing.is_empty()) else {
        return Err(CoreError::MissingFields(missing));
    };

    let num_guests: GuestCount = coerce_guest_count(draft.num_guests.as_deref())?;

    let special_requests: String = draft
        .special_requests
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    Ok(BookingRequest {
        room_id: room_id.to_string(),
        start_date: stay.check_in_wire(),
        end_date: stay.check_out_wire(),
        guest_name: guest_name.to_string(),
        guest_phone: guest_phone.to_string(),
        num_guests,
        special_requests,
        payment_method: draft.payment_method.unwrap_or_default(),
        quote: quote_stay(&stay, rate),
    })
}
