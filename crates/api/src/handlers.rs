// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client operations: authorization, local validation, then one gateway call.

use hotel_booking::{
    BookingDraft, BookingRequest, StatusTransition, build_booking_request, plan_status_change,
};
use hotel_booking_domain::{
    Booking, BookingStatus, NightlyRate, PriceQuote, Room, RoomFilter, RoomInput,
    TransitionPolicy, User, UserInput, calculate_price, validate_room_input,
    validate_user_input,
};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::auth::{AuthorizationService, SessionContext};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::gateway::{BookingConfirmation, BookingGateway};

/// Prices a stay in `room` without contacting the backend.
///
/// Called whenever either date changes; recomputes from scratch each time.
///
/// # Errors
///
/// Returns `ApiError::Validation` if check-out is not after check-in or the
/// room's price is unusable.
pub fn quote_room(
    room: &Room,
    check_in: OffsetDateTime,
    check_out: OffsetDateTime,
) -> Result<PriceQuote, ApiError> {
    calculate_price(check_in, check_out, room.price).map_err(translate_domain_error)
}

/// Lists rooms matching `filter`.
///
/// # Errors
///
/// Returns an error if the gateway call fails.
pub async fn browse_rooms<G: BookingGateway>(
    gateway: &G,
    session: Option<&SessionContext>,
    filter: &RoomFilter,
) -> Result<Vec<Room>, ApiError> {
    let rooms: Vec<Room> = gateway.list_rooms(session).await?;
    let total: usize = rooms.len();
    let matching: Vec<Room> = filter.apply(&rooms).into_iter().cloned().collect();
    debug!(total, matching = matching.len(), "Filtered room catalogue");
    Ok(matching)
}

/// Fetches a single room.
///
/// # Errors
///
/// Returns an error if the session is unusable or the room does not exist.
pub async fn get_room<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    room_id: &str,
) -> Result<Room, ApiError> {
    AuthorizationService::authenticate(session)?;
    gateway.get_room(session, room_id).await
}

/// Validates a booking form and submits it.
///
/// This function:
/// - Verifies the session is usable
/// - Builds the canonical request from the draft (no network on failure)
/// - Sends it once and returns the backend's confirmation
///
/// # Arguments
///
/// * `gateway` - The backend
/// * `session` - The signed-in guest
/// * `draft` - The form contents
/// * `room` - The room being booked, as last fetched
///
/// # Errors
///
/// Returns an error if:
/// - The session is missing or expired
/// - The draft or the room's price fails validation
/// - The backend rejects the booking (e.g. overlapping reservation)
pub async fn submit_booking<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    draft: &BookingDraft,
    room: &Room,
) -> Result<BookingConfirmation, ApiError> {
    AuthorizationService::authenticate(session)?;

    let rate: NightlyRate = room.nightly_rate().map_err(translate_domain_error)?;
    let request: BookingRequest = build_booking_request(draft, rate).map_err(translate_core_error)?;

    debug!(
        room_id = %request.room_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        nights = request.quote().nights,
        "Submitting booking"
    );

    let confirmation: BookingConfirmation = gateway.create_booking(session, &request).await?;

    info!(
        room_id = %request.room_id,
        total_price = confirmation.total_price,
        "Booking accepted"
    );

    Ok(confirmation)
}

/// Lists the caller's own bookings.
///
/// # Errors
///
/// Returns an error if the session is unusable or the gateway call fails.
pub async fn list_my_bookings<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
) -> Result<Vec<Booking>, ApiError> {
    AuthorizationService::authenticate(session)?;
    gateway.list_my_bookings(session).await
}

/// Lists every booking.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the gateway call fails.
pub async fn admin_list_bookings<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
) -> Result<Vec<Booking>, ApiError> {
    AuthorizationService::authorize_list_all_bookings(session)?;
    gateway.admin_list_bookings(session).await
}

/// Changes a booking's status.
///
/// This function:
/// - Verifies the caller is an admin, before anything else
/// - Checks the change against the lifecycle under `policy`
/// - Sends a single patch and returns the status the backend reports
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an admin (`Forbidden`, nothing is sent)
/// - The transition is not allowed (`Validation`, nothing is sent)
/// - The backend rejects the patch
pub async fn change_booking_status<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    booking: &Booking,
    requested: BookingStatus,
    policy: TransitionPolicy,
) -> Result<BookingStatus, ApiError> {
    AuthorizationService::authorize_change_booking_status(session)?;

    let planned: StatusTransition =
        plan_status_change(booking, requested, policy).map_err(translate_core_error)?;

    let confirmed: BookingStatus = gateway
        .patch_booking_status(session, &planned.booking_id, planned.to)
        .await?;

    info!(
        booking_id = %planned.booking_id,
        from = %planned.from,
        requested = %planned.to,
        confirmed = %confirmed,
        "Booking status changed"
    );

    Ok(confirmed)
}

/// Lists every registered user.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the gateway call fails.
pub async fn admin_list_users<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
) -> Result<Vec<User>, ApiError> {
    AuthorizationService::authorize_manage_users(session)?;
    gateway.admin_list_users(session).await
}

/// Creates an account after validating its fields.
///
/// # Errors
///
/// Returns an error if the caller is not an admin, the email or password is
/// unusable, or the backend rejects the account (e.g. duplicate email).
pub async fn create_user<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    user: &UserInput,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_manage_users(session)?;
    validate_user_input(user).map_err(translate_domain_error)?;
    gateway.create_user(session, user).await?;
    info!(email = %user.email.trim(), is_admin = user.is_admin, "User created");
    Ok(())
}

/// Grants or revokes the admin role.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the gateway call fails.
pub async fn set_user_admin<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    user_id: &str,
    is_admin: bool,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_manage_users(session)?;
    gateway.patch_user_role(session, user_id, is_admin).await?;
    info!(user_id, is_admin, "User role updated");
    Ok(())
}

/// Deletes a user account.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the gateway call fails.
pub async fn delete_user<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    user_id: &str,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_manage_users(session)?;
    gateway.delete_user(session, user_id).await?;
    info!(user_id, "User deleted");
    Ok(())
}

/// Creates a room after validating its fields.
///
/// # Errors
///
/// Returns an error if the caller is not an admin, the fields are invalid,
/// or the gateway call fails.
pub async fn create_room<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    room: &RoomInput,
) -> Result<Room, ApiError> {
    AuthorizationService::authorize_manage_rooms(session)?;
    validate_room_input(room).map_err(translate_domain_error)?;
    let created: Room = gateway.create_room(session, room).await?;
    info!(room_id = %created.id, title = %created.title, "Room created");
    Ok(created)
}

/// Replaces a room's fields after validating them.
///
/// # Errors
///
/// Returns an error if the caller is not an admin, the fields are invalid,
/// or the gateway call fails.
pub async fn update_room<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    room_id: &str,
    room: &RoomInput,
) -> Result<Room, ApiError> {
    AuthorizationService::authorize_manage_rooms(session)?;
    validate_room_input(room).map_err(translate_domain_error)?;
    let updated: Room = gateway.update_room(session, room_id, room).await?;
    info!(room_id, "Room updated");
    Ok(updated)
}

/// Deletes a room.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the gateway call fails.
pub async fn delete_room<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    room_id: &str,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_manage_rooms(session)?;
    gateway.delete_room(session, room_id).await?;
    info!(room_id, "Room deleted");
    Ok(())
}

/// Fetches the caller's own account.
///
/// # Errors
///
/// Returns an error if the session is unusable or the gateway call fails.
pub async fn get_profile<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
) -> Result<User, ApiError> {
    AuthorizationService::authenticate(session)?;
    gateway.get_profile(session).await
}
