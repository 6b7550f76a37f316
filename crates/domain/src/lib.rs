// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking_status;
mod display;
mod error;
mod pricing;
mod room_filter;
mod stay;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking_status::{BookingStatus, TransitionPolicy};
pub use display::{format_long_date, format_money, nights_summary};
pub use pricing::{PriceQuote, calculate_price, quote_stay};
pub use room_filter::{RoomFilter, RoomTypeFilter};
pub use stay::{StayRange, format_wire_date, parse_stay_date, validate_date_range};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Booking, GuestCount, NightlyRate, PaymentMethod, Room, RoomInput, RoomType, User, UserInput,
};
pub use validation::{validate_room_input, validate_user_input};
