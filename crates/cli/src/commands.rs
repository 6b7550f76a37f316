// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use color_eyre::eyre::Result;
use hotel_booking::BookingDraft;
use hotel_booking_api::{
    ApiError, BookingGateway, SessionContext, admin_list_bookings, admin_list_users,
    browse_rooms, change_booking_status, collect_admin_stats, create_room, create_user, delete_room,
    delete_user, get_profile, get_room, list_my_bookings, quote_room, set_user_admin,
    submit_booking, update_room,
};
use hotel_booking_domain::{Booking, PriceQuote, Room, RoomFilter, RoomInput, UserInput};
use tracing::debug;

use crate::args::{AdminCommand, Args, BookArgs, Command};
use crate::render;

/// Runs the parsed command and returns the text to print.
///
/// # Errors
///
/// Returns an error if a required session is missing or an operation fails.
/// Operation failures are `ApiError`s inside the report.
pub async fn run<G: BookingGateway>(args: &Args, gateway: &G) -> Result<String> {
    let session: Option<SessionContext> = args.session();

    debug!(signed_in = session.is_some(), "Running command");

    match &args.command {
        Command::Quote {
            room_id,
            check_in,
            check_out,
        } => {
            let room: Room = find_room(gateway, session.as_ref(), room_id).await?;
            let quote: PriceQuote = quote_room(&room, *check_in, *check_out)?;
            Ok(render::quote(&room, *check_in, *check_out, &quote))
        }
        Command::Rooms {
            room_type,
            available,
        } => {
            let filter = RoomFilter {
                room_type: *room_type,
                available_only: *available,
            };
            let rooms: Vec<Room> = browse_rooms(gateway, session.as_ref(), &filter).await?;
            Ok(render::rooms_table(&rooms))
        }
        Command::Room { room_id } => {
            let session: SessionContext = args.require_session()?;
            let room: Room = get_room(gateway, &session, room_id).await?;
            Ok(render::room_detail(&room))
        }
        Command::Book(book) => {
            let session: SessionContext = args.require_session()?;
            let room: Room = get_room(gateway, &session, &book.room_id).await?;
            let draft: BookingDraft = draft_from(book);
            let confirmation = submit_booking(gateway, &session, &draft, &room).await?;
            Ok(render::confirmation(&confirmation))
        }
        Command::Bookings => {
            let session: SessionContext = args.require_session()?;
            let bookings: Vec<Booking> = list_my_bookings(gateway, &session).await?;
            Ok(render::bookings_table(&bookings))
        }
        Command::Profile => {
            let session: SessionContext = args.require_session()?;
            let user = get_profile(gateway, &session).await?;
            Ok(render::profile(&user))
        }
        Command::Admin(admin) => {
            let session: SessionContext = args.require_session()?;
            run_admin(args, gateway, &session, admin).await
        }
    }
}

async fn run_admin<G: BookingGateway>(
    args: &Args,
    gateway: &G,
    session: &SessionContext,
    command: &AdminCommand,
) -> Result<String> {
    match command {
        AdminCommand::Stats => {
            let dashboard = collect_admin_stats(gateway, session).await?;
            Ok(render::dashboard(&dashboard))
        }
        AdminCommand::Bookings => {
            let bookings: Vec<Booking> = admin_list_bookings(gateway, session).await?;
            Ok(render::bookings_table(&bookings))
        }
        AdminCommand::SetStatus { booking_id, status } => {
            let bookings: Vec<Booking> = admin_list_bookings(gateway, session).await?;
            let booking: &Booking = find_booking(&bookings, booking_id)?;
            let confirmed = change_booking_status(
                gateway,
                session,
                booking,
                *status,
                args.transition_policy(),
            )
            .await?;
            if confirmed == *status {
                Ok(format!("Booking {booking_id} is now {confirmed}"))
            } else {
                Ok(format!(
                    "Booking {booking_id} is {confirmed} (requested {status})"
                ))
            }
        }
        AdminCommand::Users => {
            let users = admin_list_users(gateway, session).await?;
            Ok(render::users_table(&users))
        }
        AdminCommand::CreateUser {
            email,
            password,
            grant_admin,
        } => {
            let user = UserInput {
                email: email.clone(),
                password: password.clone(),
                is_admin: *grant_admin,
            };
            create_user(gateway, session, &user).await?;
            let role: &str = if *grant_admin { "admin" } else { "guest" };
            Ok(format!("User {email} created as {role}"))
        }
        AdminCommand::SetAdmin { user_id, is_admin } => {
            set_user_admin(gateway, session, user_id, *is_admin).await?;
            let role: &str = if *is_admin { "admin" } else { "guest" };
            Ok(format!("User {user_id} is now {role}"))
        }
        AdminCommand::DeleteUser { user_id } => {
            delete_user(gateway, session, user_id).await?;
            Ok(format!("User {user_id} deleted"))
        }
        AdminCommand::CreateRoom(room) => {
            let input: RoomInput = room.clone().into();
            let created: Room = create_room(gateway, session, &input).await?;
            Ok(render::room_line(&created))
        }
        AdminCommand::UpdateRoom { room_id, room } => {
            let input: RoomInput = room.clone().into();
            let updated: Room = update_room(gateway, session, room_id, &input).await?;
            Ok(render::room_line(&updated))
        }
        AdminCommand::DeleteRoom { room_id } => {
            delete_room(gateway, session, room_id).await?;
            Ok(format!("Room {room_id} deleted"))
        }
    }
}

/// Looks a room up directly when signed in, otherwise through the public listing.
async fn find_room<G: BookingGateway>(
    gateway: &G,
    session: Option<&SessionContext>,
    room_id: &str,
) -> Result<Room, ApiError> {
    if let Some(session) = session {
        return get_room(gateway, session, room_id).await;
    }
    browse_rooms(gateway, None, &RoomFilter::default())
        .await?
        .into_iter()
        .find(|room| room.id == room_id)
        .ok_or_else(|| ApiError::NotFound {
            resource: format!("Room {room_id}"),
        })
}

fn find_booking<'a>(bookings: &'a [Booking], booking_id: &str) -> Result<&'a Booking, ApiError> {
    bookings
        .iter()
        .find(|booking| booking.id == booking_id)
        .ok_or_else(|| ApiError::NotFound {
            resource: format!("Booking {booking_id}"),
        })
}

fn draft_from(book: &BookArgs) -> BookingDraft {
    BookingDraft {
        room_id: book.room_id.clone(),
        start_date: Some(book.check_in),
        end_date: Some(book.check_out),
        guest_name: book.name.clone(),
        guest_phone: book.phone.clone(),
        num_guests: book.guests.clone(),
        special_requests: book.requests.clone(),
        payment_method: book.payment,
    }
}
