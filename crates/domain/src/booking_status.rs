// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking status lifecycle and transition rules.
//!
//! A booking moves `Pending → Booked → Checked In → Checked Out`, and may be
//! cancelled from any of the first three states. `Checked Out` and
//! `Cancelled` are terminal under every policy. Status changes are always
//! administrator-initiated; nothing here advances status on its own.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Awaiting confirmation; administrator-assignable.
    Pending,
    /// Confirmed reservation. Default for guest-created bookings.
    Booked,
    /// Guest has arrived.
    #[serde(rename = "Checked In")]
    CheckedIn,
    /// Guest has left.
    #[serde(rename = "Checked Out")]
    CheckedOut,
    /// Reservation was cancelled.
    Cancelled,
    /// A status this client does not recognise, or none at all.
    ///
    /// Never produced by parsing and never a valid transition target.
    #[serde(other)]
    Unknown,
}

/// How strictly status transitions are checked.
///
/// The administrative console historically let any status be set to any
/// other. `Permissive` keeps that behaviour apart from the terminal-state
/// rule; `Strict` only allows the forward lifecycle edges and cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any non-terminal status may move to any status.
    #[default]
    Permissive,
    /// Only lifecycle edges are allowed.
    Strict,
}

impl BookingStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Booked,
        Self::CheckedIn,
        Self::CheckedOut,
        Self::Cancelled,
    ];

    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Booked => "Booked",
            Self::CheckedIn => "Checked In",
            Self::CheckedOut => "Checked Out",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    /// Parses a status from its wire representation.
    ///
    /// Matching is case-insensitive and accepts `_`/`-` in place of the
    /// space so command-line input like `checked_in` resolves.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "booked" => Ok(Self::Booked),
            "checked in" => Ok(Self::CheckedIn),
            "checked out" => Ok(Self::CheckedOut),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if no transition may leave this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }

    /// Returns true if the booking counts towards active occupancy.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Booked | Self::CheckedIn)
    }

    /// Checks whether moving to `target` is allowed under `policy`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self, policy: TransitionPolicy) -> bool {
        if self.is_terminal() || matches!(target, Self::Unknown) {
            return false;
        }

        match policy {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::Strict => matches!(
                (self, target),
                (Self::Pending, Self::Booked)
                    | (Self::Booked, Self::CheckedIn)
                    | (Self::CheckedIn, Self::CheckedOut)
                    | (
                        Self::Pending | Self::Booked | Self::CheckedIn,
                        Self::Cancelled
                    )
            ),
        }
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the current status is
    /// terminal, or if `policy` is strict and the edge is not part of the
    /// lifecycle.
    pub fn validate_transition(
        &self,
        new_status: Self,
        policy: TransitionPolicy,
    ) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: String::from("cannot transition from terminal state"),
            });
        }

        if self.can_transition_to(new_status, policy) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: String::from("transition not permitted by booking lifecycle rules"),
            })
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown transition policy '{other}'")),
        }
    }
}
