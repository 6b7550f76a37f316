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
#![allow(clippy::multiple_crate_versions)]

mod args;
mod commands;
mod render;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::Context;
use hotel_booking_api::ApiError;
use hotel_booking_gateway::HttpBookingGateway;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = args.gateway_config();
    debug!(base_url = %config.base_url(), "Using booking service");
    let gateway = HttpBookingGateway::new(&config).wrap_err("Invalid booking service URL")?;

    match commands::run(&args, &gateway).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(report) => {
            if report
                .downcast_ref::<ApiError>()
                .is_some_and(ApiError::invalidates_session)
            {
                warn!("The session is no longer valid; sign in again and update HOTEL_API_TOKEN");
            }
            Err(report)
        }
    }
}
