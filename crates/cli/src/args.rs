// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::eyre::{Result, eyre};
use hotel_booking_api::{Role, SessionContext};
use hotel_booking_domain::{
    BookingStatus, PaymentMethod, RoomInput, RoomType, RoomTypeFilter,
    TransitionPolicy, parse_stay_date,
};
use hotel_booking_gateway::{DEFAULT_BASE_URL, GatewayConfig};
use time::OffsetDateTime;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Hotel booking client - browse rooms, book stays, manage the hotel
#[derive(Parser, Debug)]
#[command(name = "hotel-booking", author, version, about, long_about = None)]
pub struct Args {
    /// Backend base URL
    #[arg(long, env = "HOTEL_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Bearer token of the signed-in account
    #[arg(long, env = "HOTEL_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Treat the signed-in account as an administrator
    #[arg(long, env = "HOTEL_IS_ADMIN", global = true)]
    pub admin: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Only allow forward lifecycle moves when changing booking status
    #[arg(long, env = "HOTEL_STRICT_TRANSITIONS", global = true)]
    pub strict_transitions: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(&self.api_url)
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// The session, if a token was supplied.
    pub fn session(&self) -> Option<SessionContext> {
        self.token
            .as_deref()
            .map(|token| SessionContext::new(token, Role::from_is_admin(self.admin)))
    }

    /// The session, for commands that cannot run signed out.
    pub fn require_session(&self) -> Result<SessionContext> {
        self.session()
            .ok_or_else(|| eyre!("this command needs --token or HOTEL_API_TOKEN"))
    }

    pub const fn transition_policy(&self) -> TransitionPolicy {
        if self.strict_transitions {
            TransitionPolicy::Strict
        } else {
            TransitionPolicy::Permissive
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price a stay without booking it
    Quote {
        /// Room identifier
        room_id: String,
        /// Check-in date (YYYY-MM-DD)
        #[arg(value_parser = parse_stay_date)]
        check_in: OffsetDateTime,
        /// Check-out date (YYYY-MM-DD)
        #[arg(value_parser = parse_stay_date)]
        check_out: OffsetDateTime,
    },

    /// List rooms
    Rooms {
        /// Room type to show: any, standard, deluxe or suite
        #[arg(long = "type", default_value = "any")]
        room_type: RoomTypeFilter,
        /// Hide rooms that are not currently bookable
        #[arg(long)]
        available: bool,
    },

    /// Show one room
    Room {
        /// Room identifier
        room_id: String,
    },

    /// Book a room
    Book(BookArgs),

    /// List your bookings
    Bookings,

    /// Show your account
    Profile,

    /// Administrative commands
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, ClapArgs)]
pub struct BookArgs {
    /// Room identifier
    pub room_id: String,
    /// Check-in date (YYYY-MM-DD)
    #[arg(value_parser = parse_stay_date)]
    pub check_in: OffsetDateTime,
    /// Check-out date (YYYY-MM-DD)
    #[arg(value_parser = parse_stay_date)]
    pub check_out: OffsetDateTime,
    /// Lead guest name
    #[arg(long)]
    pub name: String,
    /// Lead guest phone
    #[arg(long)]
    pub phone: String,
    /// Number of guests (1-10)
    #[arg(long)]
    pub guests: Option<String>,
    /// Special requests
    #[arg(long)]
    pub requests: Option<String>,
    /// Payment method: credit-card, debit-card, paypal or pay-at-hotel
    #[arg(long)]
    pub payment: Option<PaymentMethod>,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Show dashboard statistics
    Stats,

    /// List every booking
    Bookings,

    /// Change a booking's status
    SetStatus {
        /// Booking identifier
        booking_id: String,
        /// New status, e.g. "Checked In" or checked-in
        status: BookingStatus,
    },

    /// List users
    Users,

    /// Create a user account
    CreateUser {
        /// Login email
        email: String,
        /// Initial password
        #[arg(long, env = "HOTEL_NEW_USER_PASSWORD", hide_env_values = true)]
        password: String,
        /// Create the account as an administrator
        #[arg(long)]
        grant_admin: bool,
    },

    /// Grant or revoke the admin role
    SetAdmin {
        /// User identifier
        user_id: String,
        /// true to grant, false to revoke
        #[arg(action = ArgAction::Set)]
        is_admin: bool,
    },

    /// Delete a user account
    DeleteUser {
        /// User identifier
        user_id: String,
    },

    /// Create a room
    CreateRoom(RoomArgs),

    /// Replace a room's fields
    UpdateRoom {
        /// Room identifier
        room_id: String,
        #[command(flatten)]
        room: RoomArgs,
    },

    /// Delete a room
    DeleteRoom {
        /// Room identifier
        room_id: String,
    },
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RoomArgs {
    /// Display title
    #[arg(long)]
    pub title: String,
    /// Description
    #[arg(long, default_value = "")]
    pub description: String,
    /// Price per night
    #[arg(long)]
    pub price: f64,
    /// Room type: standard, deluxe or suite
    #[arg(long = "type")]
    pub room_type: RoomType,
    /// Image URL, repeatable
    #[arg(long = "image")]
    pub images: Vec<String>,
}

impl From<RoomArgs> for RoomInput {
    fn from(args: RoomArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            price: args.price,
            room_type: args.room_type,
            images: args.images,
        }
    }
}
