// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Room category offered by the hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Standard room.
    Standard,
    /// Deluxe room.
    Deluxe,
    /// Suite.
    Suite,
    /// A type this client does not recognise, or none at all.
    ///
    /// Never produced by parsing and rejected on room forms.
    #[serde(other)]
    Unknown,
}

impl RoomType {
    /// Converts this room type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deluxe => "deluxe",
            Self::Suite => "suite",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "deluxe" => Ok(Self::Deluxe),
            "suite" => Ok(Self::Suite),
            _ => Err(DomainError::InvalidRoomType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the guest intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Credit card. The default when no method is chosen.
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Debit card.
    #[serde(rename = "Debit Card")]
    DebitCard,
    /// `PayPal`.
    #[serde(rename = "PayPal")]
    PayPal,
    /// Settled at the front desk.
    #[serde(rename = "Pay at Hotel")]
    PayAtHotel,
}

impl PaymentMethod {
    /// Converts this payment method to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::PayPal => "PayPal",
            Self::PayAtHotel => "Pay at Hotel",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "creditcard" => Ok(Self::CreditCard),
            "debitcard" => Ok(Self::DebitCard),
            "paypal" => Ok(Self::PayPal),
            "payathotel" => Ok(Self::PayAtHotel),
            _ => Err(DomainError::InvalidPaymentMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of guests on a reservation, always within `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct GuestCount(u8);

impl GuestCount {
    /// Smallest permitted party size.
    pub const MIN: u8 = 1;
    /// Largest permitted party size.
    pub const MAX: u8 = 10;

    /// Creates a guest count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuestCount` if `count` is outside `[1, 10]`.
    pub fn new(count: i64) -> Result<Self, DomainError> {
        u8::try_from(count)
            .ok()
            .filter(|c| (Self::MIN..=Self::MAX).contains(c))
            .map(Self)
            .ok_or(DomainError::InvalidGuestCount {
                count,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<i64> for GuestCount {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GuestCount> for u8 {
    fn from(count: GuestCount) -> Self {
        count.0
    }
}

const fn unknown_room_type() -> RoomType {
    RoomType::Unknown
}

const fn default_available() -> bool {
    true
}

/// A bookable room, as published by the backend.
///
/// This is a read-only copy and may be stale by the time it is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Price per night in the hotel's currency.
    pub price: f64,
    /// Room category.
    #[serde(rename = "type", default = "unknown_room_type")]
    pub room_type: RoomType,
    /// Image URLs, first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the room can currently be booked.
    #[serde(default = "default_available")]
    pub is_available: bool,
}

impl Room {
    /// Returns the room's nightly rate after checking it is usable for pricing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidNightlyRate` if the published price is
    /// negative or not finite.
    pub fn nightly_rate(&self) -> Result<NightlyRate, DomainError> {
        NightlyRate::new(self.price)
    }

    /// Returns the cover image, if any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Room fields submitted by an administrator when creating or editing a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomInput {
    /// Display title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Price per night.
    pub price: f64,
    /// Room category.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Image URLs.
    pub images: Vec<String>,
}

/// A non-negative, finite per-night price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NightlyRate(f64);

impl NightlyRate {
    /// Creates a nightly rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidNightlyRate` if `amount` is negative or not finite.
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(Self(amount))
        } else {
            Err(DomainError::InvalidNightlyRate(amount))
        }
    }

    /// Returns the amount per night.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.0
    }
}

/// A registered account, as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Whether the account holds the administrator role.
    #[serde(default)]
    pub is_admin: bool,
    /// Creation timestamp as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Account fields submitted by an administrator creating a user.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct UserInput {
    /// Login email.
    pub email: String,
    /// Initial password, sent once and never stored by the client.
    pub password: String,
    /// Whether the new account is an administrator.
    pub is_admin: bool,
}

impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

const fn unknown_status() -> BookingStatus {
    BookingStatus::Unknown
}

const fn default_guests() -> u32 {
    1
}

/// A reservation held by the backend.
///
/// Bookings are never deleted by the client; cancellation is a status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// The booked room.
    pub room_id: String,
    /// Room title captured at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_title: Option<String>,
    /// Owner's email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Check-in date as sent by the backend.
    pub start_date: String,
    /// Check-out date as sent by the backend.
    pub end_date: String,
    /// Lead guest name.
    #[serde(default)]
    pub guest_name: String,
    /// Lead guest phone.
    #[serde(default)]
    pub guest_phone: String,
    /// Party size. Kept as reported; older records may predate the range check.
    #[serde(default = "default_guests")]
    pub num_guests: u32,
    /// Free-form requests.
    #[serde(default)]
    pub special_requests: String,
    /// Payment method.
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Price computed by the backend.
    #[serde(default)]
    pub total_price: f64,
    /// Lifecycle status.
    #[serde(default = "unknown_status")]
    pub status: BookingStatus,
    /// Creation timestamp as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Booking {
    /// Returns true if the booking counts as active (`Booked` or `Checked In`).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
