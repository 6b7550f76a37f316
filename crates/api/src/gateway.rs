// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The backend contract consumed by this crate.

use std::future::Future;

use hotel_booking::BookingRequest;
use hotel_booking_domain::{Booking, BookingStatus, Room, RoomInput, User, UserInput};
use serde::{Deserialize, Serialize};

use crate::auth::SessionContext;
use crate::error::ApiError;

/// What the backend returns after accepting a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Price computed by the backend. This, not the client quote, is billed.
    pub total_price: f64,
    /// Optional confirmation message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The stored booking, when the backend echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
}

/// Access to the hotel's REST backend.
///
/// Implementations attach the session's bearer token, map HTTP failures onto
/// [`ApiError`], and never retry. Authorization pre-checks are done by the
/// callers in this crate, not by implementations.
pub trait BookingGateway {
    /// `GET /rooms`. The session is optional for the public listing.
    fn list_rooms(
        &self,
        session: Option<&SessionContext>,
    ) -> impl Future<Output = Result<Vec<Room>, ApiError>> + Send;

    /// `GET /rooms/{id}`.
    fn get_room(
        &self,
        session: &SessionContext,
        room_id: &str,
    ) -> impl Future<Output = Result<Room, ApiError>> + Send;

    /// `POST /book`.
    fn create_booking(
        &self,
        session: &SessionContext,
        request: &BookingRequest,
    ) -> impl Future<Output = Result<BookingConfirmation, ApiError>> + Send;

    /// `GET /bookings`, scoped to the caller.
    fn list_my_bookings(
        &self,
        session: &SessionContext,
    ) -> impl Future<Output = Result<Vec<Booking>, ApiError>> + Send;

    /// `GET /admin/bookings`.
    fn admin_list_bookings(
        &self,
        session: &SessionContext,
    ) -> impl Future<Output = Result<Vec<Booking>, ApiError>> + Send;

    /// `PATCH /admin/bookings/{id}` with `{ status }`. Returns the status the
    /// backend reports after the change.
    fn patch_booking_status(
        &self,
        session: &SessionContext,
        booking_id: &str,
        status: BookingStatus,
    ) -> impl Future<Output = Result<BookingStatus, ApiError>> + Send;

    /// `GET /admin/users`.
    fn admin_list_users(
        &self,
        session: &SessionContext,
    ) -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;

    /// `POST /auth/register` with `{ email, password, is_admin }`, sent with
    /// the administrator's bearer token.
    fn create_user(
        &self,
        session: &SessionContext,
        user: &UserInput,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `PATCH /admin/users/{id}` with `{ is_admin }`.
    fn patch_user_role(
        &self,
        session: &SessionContext,
        user_id: &str,
        is_admin: bool,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `DELETE /admin/users/{id}`.
    fn delete_user(
        &self,
        session: &SessionContext,
        user_id: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `POST /rooms`.
    fn create_room(
        &self,
        session: &SessionContext,
        room: &RoomInput,
    ) -> impl Future<Output = Result<Room, ApiError>> + Send;

    /// `PUT /rooms/{id}`.
    fn update_room(
        &self,
        session: &SessionContext,
        room_id: &str,
        room: &RoomInput,
    ) -> impl Future<Output = Result<Room, ApiError>> + Send;

    /// `DELETE /rooms/{id}`.
    fn delete_room(
        &self,
        session: &SessionContext,
        room_id: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET /profile`.
    fn get_profile(
        &self,
        session: &SessionContext,
    ) -> impl Future<Output = Result<User, ApiError>> + Send;
}
