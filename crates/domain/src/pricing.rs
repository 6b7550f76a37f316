// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay pricing.
//!
//! Totals are kept at full precision. Rounding to cents happens only when a
//! price is formatted for display.

use crate::error::DomainError;
use crate::stay::{StayRange, validate_date_range};
use crate::types::NightlyRate;
use serde::Serialize;
use time::OffsetDateTime;

/// Price of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    /// Billable nights.
    pub nights: u32,
    /// Rate applied per night.
    pub nightly_rate: f64,
    /// `nights × nightly_rate`, unrounded.
    pub total: f64,
}

/// Prices an already validated stay.
#[must_use]
pub fn quote_stay(stay: &StayRange, rate: NightlyRate) -> PriceQuote {
    let nights: u32 = stay.nights();
    PriceQuote {
        nights,
        nightly_rate: rate.amount(),
        total: f64::from(nights) * rate.amount(),
    }
}

/// Validates a check-in / check-out pair and prices it at `nightly_rate`.
///
/// This is recomputed from scratch on every call; there is no incremental
/// state.
///
/// # Errors
///
/// Returns an error if:
/// - `end <= start` (`DomainError::InvalidRange`)
/// - `nightly_rate` is negative or not finite (`DomainError::InvalidNightlyRate`)
pub fn calculate_price(
    start: OffsetDateTime,
    end: OffsetDateTime,
    nightly_rate: f64,
) -> Result<PriceQuote, DomainError> {
    let stay: StayRange = validate_date_range(start, end)?;
    let rate: NightlyRate = NightlyRate::new(nightly_rate)?;
    Ok(quote_stay(&stay, rate))
}
