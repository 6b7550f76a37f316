// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Check-in / check-out ranges.
//!
//! Night counting uses whole elapsed days, rounded down, with a minimum of
//! one night. Partial days are truncated rather than billed. Dates travel to
//! the backend as `YYYY-MM-DD`.

use crate::error::DomainError;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

const SECONDS_PER_DAY: i64 = 86_400;

/// A validated stay whose check-out is strictly after its check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: OffsetDateTime,
    check_out: OffsetDateTime,
}

impl StayRange {
    /// Creates a stay range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRange` if `check_out <= check_in`.
    pub fn new(check_in: OffsetDateTime, check_out: OffsetDateTime) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidRange {
                start: check_in,
                end: check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Creates a stay range from calendar dates, each taken at midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRange` if `check_out <= check_in`.
    pub fn from_dates(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        Self::new(
            check_in.midnight().assume_utc(),
            check_out.midnight().assume_utc(),
        )
    }

    /// Returns the check-in instant.
    #[must_use]
    pub const fn check_in(&self) -> OffsetDateTime {
        self.check_in
    }

    /// Returns the check-out instant.
    #[must_use]
    pub const fn check_out(&self) -> OffsetDateTime {
        self.check_out
    }

    /// Number of billable nights: `max(1, floor(elapsed / 1 day))`.
    #[must_use]
    pub fn nights(&self) -> u32 {
        let whole_days: i64 = (self.check_out - self.check_in).whole_seconds() / SECONDS_PER_DAY;
        u32::try_from(whole_days.max(1)).unwrap_or(u32::MAX)
    }

    /// Check-in date in wire format.
    #[must_use]
    pub fn check_in_wire(&self) -> String {
        format_wire_date(self.check_in)
    }

    /// Check-out date in wire format.
    #[must_use]
    pub fn check_out_wire(&self) -> String {
        format_wire_date(self.check_out)
    }
}

/// Validates a check-in / check-out pair.
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` if `end <= start`.
pub fn validate_date_range(
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<StayRange, DomainError> {
    StayRange::new(start, end)
}

/// Parses a date as entered on a booking form.
///
/// Accepts a bare `YYYY-MM-DD` date (taken as midnight UTC) or a full
/// RFC 3339 timestamp.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the input matches neither form.
pub fn parse_stay_date(input: &str) -> Result<OffsetDateTime, DomainError> {
    let trimmed: &str = input.trim();
    let date_only = format_description!("[year]-[month]-[day]");

    if let Ok(date) = Date::parse(trimmed, &date_only) {
        return Ok(date.midnight().assume_utc());
    }

    OffsetDateTime::parse(trimmed, &Rfc3339).map_err(|e| DomainError::DateParseError {
        date_string: input.to_string(),
        error: e.to_string(),
    })
}

/// Renders the UTC calendar date of `instant` as `YYYY-MM-DD`.
#[must_use]
pub fn format_wire_date(instant: OffsetDateTime) -> String {
    let date: Date = instant.to_offset(UtcOffset::UTC).date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
