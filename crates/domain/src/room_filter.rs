// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Room, RoomType};
use std::str::FromStr;

/// Room type selection on the availability search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomTypeFilter {
    /// Any room type.
    #[default]
    Any,
    /// Only rooms of the given type.
    Only(RoomType),
}

impl FromStr for RoomTypeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            Ok(Self::Any)
        } else {
            s.parse::<RoomType>().map(Self::Only)
        }
    }
}

/// Criteria for narrowing the room catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomFilter {
    /// Which room types to keep.
    pub room_type: RoomTypeFilter,
    /// Drop rooms flagged unavailable.
    pub available_only: bool,
}

impl RoomFilter {
    /// Returns true if `room` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, room: &Room) -> bool {
        let type_ok: bool = match self.room_type {
            RoomTypeFilter::Any => true,
            RoomTypeFilter::Only(wanted) => room.room_type == wanted,
        };
        type_ok && (!self.available_only || room.is_available)
    }

    /// Keeps the matching rooms, preserving catalogue order.
    #[must_use]
    pub fn apply<'a>(&self, rooms: &'a [Room]) -> Vec<&'a Room> {
        rooms.iter().filter(|room| self.matches(room)).collect()
    }
}
