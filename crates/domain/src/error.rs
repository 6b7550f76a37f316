// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Check-out is not strictly after check-in.
    InvalidRange {
        /// The requested check-in instant.
        start: OffsetDateTime,
        /// The requested check-out instant.
        end: OffsetDateTime,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to render a date for display.
    DateFormatError {
        /// The formatting error message.
        error: String,
    },
    /// Nightly rate is negative or not a finite number.
    InvalidNightlyRate(f64),
    /// Guest count is outside the permitted range.
    InvalidGuestCount {
        /// The rejected count.
        count: i64,
        /// The smallest permitted count.
        min: u8,
        /// The largest permitted count.
        max: u8,
    },
    /// Payment method is not one of the accepted methods.
    InvalidPaymentMethod(String),
    /// Room type is not one of the known types.
    InvalidRoomType(String),
    /// Room title is empty or invalid.
    InvalidRoomTitle(String),
    /// Room image URL is empty or invalid.
    InvalidRoomImage(String),
    /// Account email is blank or malformed.
    InvalidEmail(String),
    /// Account password is blank.
    InvalidPassword(String),
    /// Booking status string is not recognized.
    InvalidBookingStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A status transition was rejected by the lifecycle rules.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { start, end } => {
                write!(
                    f,
                    "Check-out ({end}) must be after check-in ({start})"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateFormatError { error } => write!(f, "Failed to format date: {error}"),
            Self::InvalidNightlyRate(rate) => {
                write!(
                    f,
                    "Invalid nightly rate: {rate}. Must be a non-negative number"
                )
            }
            Self::InvalidGuestCount { count, min, max } => {
                write!(
                    f,
                    "Invalid guest count: {count}. Must be between {min} and {max}"
                )
            }
            Self::InvalidPaymentMethod(method) => {
                write!(f, "Invalid payment method: {method}")
            }
            Self::InvalidRoomType(room_type) => write!(f, "Invalid room type: {room_type}"),
            Self::InvalidRoomTitle(msg) => write!(f, "Invalid room title: {msg}"),
            Self::InvalidRoomImage(msg) => write!(f, "Invalid room image: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidPassword(msg) => write!(f, "Invalid password: {msg}"),
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: {status}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot change booking status from {from} to {to}: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
