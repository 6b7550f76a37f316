// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use hotel_booking_domain::{Booking, BookingStatus, TransitionPolicy};

/// A validated request to move one booking to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransition {
    /// The booking being changed.
    pub booking_id: String,
    /// Status before the change.
    pub from: BookingStatus,
    /// Requested status.
    pub to: BookingStatus,
}

/// Checks a status change against the lifecycle and returns the new status.
///
/// Nothing leaves `Checked Out` or `Cancelled`. Beyond that, `policy` decides
/// whether any other status may be set directly or only the forward edges of
/// the lifecycle.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` wrapping
/// `DomainError::InvalidStatusTransition` when the change is not allowed.
pub fn transition(
    current: BookingStatus,
    requested: BookingStatus,
    policy: TransitionPolicy,
) -> Result<BookingStatus, CoreError> {
    current.validate_transition(requested, policy)?;
    Ok(requested)
}

/// Plans a status change for a booking as last seen by the client.
///
/// The booking itself is left untouched; the backend's response is the
/// authoritative outcome.
///
/// # Errors
///
/// Returns an error if the change is rejected by [`transition`].
pub fn plan_status_change(
    booking: &Booking,
    requested: BookingStatus,
    policy: TransitionPolicy,
) -> Result<StatusTransition, CoreError> {
    let to: BookingStatus = transition(booking.status, requested, policy)?;
    Ok(StatusTransition {
        booking_id: booking.id.clone(),
        from: booking.status,
        to,
    })
}
