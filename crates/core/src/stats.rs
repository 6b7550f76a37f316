// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hotel_booking_domain::{Booking, Room, User};
use serde::Serialize;

/// Dashboard figures derived from the live collections.
///
/// Recomputed on every load and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AdminStats {
    /// Number of bookings.
    pub total_bookings: usize,
    /// Number of rooms.
    pub total_rooms: usize,
    /// Bookings that are `Booked` or `Checked In`.
    pub active_bookings: usize,
    /// Number of registered users.
    pub total_users: usize,
}

impl AdminStats {
    /// Reduces the three collections into dashboard figures.
    ///
    /// A collection that could not be fetched is passed as an empty slice and
    /// simply contributes zero.
    #[must_use]
    pub fn from_collections(bookings: &[Booking], rooms: &[Room], users: &[User]) -> Self {
        Self {
            total_bookings: bookings.len(),
            total_rooms: rooms.len(),
            active_bookings: bookings.iter().filter(|b| b.is_active()).count(),
            total_users: users.len(),
        }
    }
}
