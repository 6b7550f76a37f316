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

mod draft;
mod error;
mod lifecycle;
mod request;
mod stats;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use draft::BookingDraft;
pub use error::CoreError;
pub use lifecycle::{StatusTransition, plan_status_change, transition};
pub use request::{BookingRequest, build_booking_request, coerce_guest_count};
pub use stats::AdminStats;
