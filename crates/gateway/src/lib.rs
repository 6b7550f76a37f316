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

mod client;
mod config;
mod error;

#[cfg(test)]
mod tests;

pub use client::HttpBookingGateway;
pub use config::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT, GatewayConfig};
pub use error::{GatewayError, error_message};
