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

mod aggregate;
mod auth;
mod error;
mod gateway;
mod handlers;
mod view_scope;

#[cfg(test)]
mod tests;

pub use aggregate::{
    AdminDashboard, SourceResult, collect_admin_stats, refresh_admin_dashboard, settle,
};
pub use auth::{AuthorizationService, Role, SessionContext};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use gateway::{BookingConfirmation, BookingGateway};
pub use handlers::{
    admin_list_bookings, admin_list_users, browse_rooms, change_booking_status, create_room,
    create_user, delete_room, delete_user, get_profile, get_room, list_my_bookings, quote_room,
    set_user_admin, submit_booking, update_room,
};
pub use view_scope::{ViewScope, ViewTicket};
