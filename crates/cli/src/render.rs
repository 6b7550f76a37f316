// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of rooms, bookings, users and quotes.

use std::fmt::Write;

use hotel_booking_api::{AdminDashboard, BookingConfirmation};
use hotel_booking_domain::{
    Booking, PriceQuote, Room, User, format_long_date, format_money, nights_summary,
};
use time::OffsetDateTime;

/// Leading `YYYY-MM-DD` of a backend timestamp.
fn day_of(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

pub fn room_line(room: &Room) -> String {
    let availability: &str = if room.is_available {
        "available"
    } else {
        "unavailable"
    };
    format!(
        "{:<24} {:<32} {:<9} {:>12}/night  {availability}",
        room.id,
        room.title,
        room.room_type.as_str(),
        format_money(room.price),
    )
}

pub fn rooms_table(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return String::from("No rooms match.");
    }
    rooms.iter().map(room_line).collect::<Vec<_>>().join("\n")
}

pub fn room_detail(room: &Room) -> String {
    let mut out: String = format!(
        "{} ({})\n{}\n{} per night",
        room.title,
        room.room_type.as_str(),
        room.description,
        format_money(room.price)
    );
    if let Some(image) = room.cover_image() {
        let _ = write!(out, "\nImage: {image}");
    }
    if !room.is_available {
        out.push_str("\nCurrently unavailable");
    }
    out
}

pub fn booking_line(booking: &Booking) -> String {
    format!(
        "{:<24} {:<24} {} -> {}  {:<11} {:>12}  {}",
        booking.id,
        booking.room_title.as_deref().unwrap_or(&booking.room_id),
        day_of(&booking.start_date),
        day_of(&booking.end_date),
        booking.status.as_str(),
        format_money(booking.total_price),
        booking.guest_name,
    )
}

pub fn bookings_table(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return String::from("No bookings.");
    }
    bookings
        .iter()
        .map(booking_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn users_table(users: &[User]) -> String {
    if users.is_empty() {
        return String::from("No users.");
    }
    users
        .iter()
        .map(|user| {
            let role: &str = if user.is_admin { "admin" } else { "guest" };
            format!("{:<24} {:<32} {:<24} {role}", user.id, user.email, user.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn profile(user: &User) -> String {
    let role: &str = if user.is_admin { "Administrator" } else { "Guest" };
    format!(
        "{}\n{}\nPhone: {}\nAddress: {}\nRole: {role}",
        user.name,
        user.email,
        user.phone,
        user.address.as_deref().unwrap_or("-")
    )
}

/// Renders a quote as the booking form's summary panel.
pub fn quote(
    room: &Room,
    check_in: OffsetDateTime,
    check_out: OffsetDateTime,
    quote: &PriceQuote,
) -> String {
    let check_in: String =
        format_long_date(check_in.date()).unwrap_or_else(|_| check_in.date().to_string());
    let check_out: String =
        format_long_date(check_out.date()).unwrap_or_else(|_| check_out.date().to_string());
    format!(
        "{}\n{check_in} to {check_out}\n{}\n{} x {} = {}",
        room.title,
        nights_summary(quote.nights),
        format_money(quote.nightly_rate),
        quote.nights,
        format_money(quote.total),
    )
}

pub fn confirmation(confirmation: &BookingConfirmation) -> String {
    let headline: &str = confirmation
        .message
        .as_deref()
        .unwrap_or("Booking submitted");
    format!(
        "{headline}\nTotal: {}",
        format_money(confirmation.total_price)
    )
}

pub fn dashboard(dashboard: &AdminDashboard) -> String {
    let stats = &dashboard.stats;
    let mut out: String = format!(
        "Total bookings:  {}\nActive bookings: {}\nRooms:           {}\nUsers:           {}",
        stats.total_bookings, stats.active_bookings, stats.total_rooms, stats.total_users
    );
    if dashboard.is_degraded() {
        let _ = write!(
            out,
            "\nIncomplete: could not load {}",
            dashboard.failed_sources.join(", ")
        );
    }
    out
}
