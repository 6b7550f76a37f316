// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::{Arc, Mutex};

use hotel_booking::{BookingDraft, BookingRequest};
use hotel_booking_domain::{
    Booking, BookingStatus, PaymentMethod, Room, RoomInput, RoomType, User, UserInput,
};
use time::macros::datetime;
use tokio::sync::Barrier;

use crate::{ApiError, BookingConfirmation, BookingGateway, Role, SessionContext};

pub fn create_test_admin() -> SessionContext {
    SessionContext::new("admin-token", Role::Admin)
}

pub fn create_test_guest() -> SessionContext {
    SessionContext::new("guest-token", Role::Guest)
}

pub fn create_test_room(id: &str, room_type: RoomType, price: f64) -> Room {
    Room {
        id: String::from(id),
        title: format!("Room {id}"),
        description: String::from("Quiet, courtyard side"),
        price,
        room_type,
        images: vec![format!("https://img.example/{id}.jpg")],
        is_available: true,
    }
}

pub fn create_test_booking(id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: String::from(id),
        room_id: String::from("r1"),
        room_title: Some(String::from("Room r1")),
        user_email: Some(String::from("guest@example.com")),
        start_date: String::from("2024-03-01"),
        end_date: String::from("2024-03-04"),
        guest_name: String::from("Ada Lovelace"),
        guest_phone: String::from("555-0100"),
        num_guests: 2,
        special_requests: String::new(),
        payment_method: PaymentMethod::CreditCard,
        total_price: 300.0,
        status,
        created_at: None,
    }
}

pub fn create_test_user(id: &str, is_admin: bool) -> User {
    User {
        id: String::from(id),
        email: format!("{id}@example.com"),
        name: String::from("Test User"),
        phone: String::from("555-0199"),
        address: None,
        is_admin,
        created_at: None,
    }
}

pub fn create_test_draft(room_id: &str) -> BookingDraft {
    BookingDraft {
        room_id: String::from(room_id),
        start_date: Some(datetime!(2024-03-01 0:00 UTC)),
        end_date: Some(datetime!(2024-03-04 0:00 UTC)),
        guest_name: String::from("Ada Lovelace"),
        guest_phone: String::from("555-0100"),
        num_guests: Some(String::from("2")),
        special_requests: None,
        payment_method: None,
    }
}

pub fn create_test_room_input() -> RoomInput {
    RoomInput {
        title: String::from("Harbour Suite"),
        description: String::from("Corner suite"),
        price: 320.0,
        room_type: RoomType::Suite,
        images: vec![String::from("https://img.example/harbour.jpg")],
    }
}

pub fn create_test_user_input() -> UserInput {
    UserInput {
        email: String::from("night.manager@example.com"),
        password: String::from("changeme"),
        is_admin: true,
    }
}

pub fn transport_error() -> ApiError {
    ApiError::Transport {
        message: String::from("connection refused"),
    }
}

/// An in-memory backend with scripted per-endpoint outcomes.
///
/// Every call is recorded by name so tests can assert what reached the
/// "network".
pub struct FakeGateway {
    pub rooms: Result<Vec<Room>, ApiError>,
    pub bookings: Result<Vec<Booking>, ApiError>,
    pub users: Result<Vec<User>, ApiError>,
    /// Status reported back by the status patch; `None` echoes the request.
    pub patched_status: Option<BookingStatus>,
    /// Outcome of `POST /book`.
    pub booking_reply: Result<BookingConfirmation, ApiError>,
    /// When set, each collection fetch waits here before answering.
    pub rendezvous: Option<Arc<Barrier>>,
    pub calls: Mutex<Vec<String>>,
    pub submitted: Mutex<Vec<BookingRequest>>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            rooms: Ok(Vec::new()),
            bookings: Ok(Vec::new()),
            users: Ok(Vec::new()),
            patched_status: None,
            booking_reply: Ok(BookingConfirmation {
                total_price: 300.0,
                message: Some(String::from("Booking successful")),
                booking: None,
            }),
            rendezvous: None,
            calls: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
        }
    }
}

impl FakeGateway {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    async fn wait_at_rendezvous(&self) {
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
    }
}

impl BookingGateway for FakeGateway {
    async fn list_rooms(&self, _session: Option<&SessionContext>) -> Result<Vec<Room>, ApiError> {
        self.record("GET /rooms");
        self.wait_at_rendezvous().await;
        self.rooms.clone()
    }

    async fn get_room(&self, _session: &SessionContext, room_id: &str) -> Result<Room, ApiError> {
        self.record(format!("GET /rooms/{room_id}"));
        self.rooms
            .clone()?
            .into_iter()
            .find(|room| room.id == room_id)
            .ok_or_else(|| ApiError::NotFound {
                resource: format!("room {room_id}"),
            })
    }

    async fn create_booking(
        &self,
        _session: &SessionContext,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ApiError> {
        self.record("POST /book");
        self.submitted.lock().unwrap().push(request.clone());
        self.booking_reply.clone()
    }

    async fn list_my_bookings(&self, _session: &SessionContext) -> Result<Vec<Booking>, ApiError> {
        self.record("GET /bookings");
        self.bookings.clone()
    }

    async fn admin_list_bookings(
        &self,
        _session: &SessionContext,
    ) -> Result<Vec<Booking>, ApiError> {
        self.record("GET /admin/bookings");
        self.wait_at_rendezvous().await;
        self.bookings.clone()
    }

    async fn patch_booking_status(
        &self,
        _session: &SessionContext,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<BookingStatus, ApiError> {
        self.record(format!("PATCH /admin/bookings/{booking_id} {status}"));
        Ok(self.patched_status.unwrap_or(status))
    }

    async fn admin_list_users(&self, _session: &SessionContext) -> Result<Vec<User>, ApiError> {
        self.record("GET /admin/users");
        self.wait_at_rendezvous().await;
        self.users.clone()
    }

    async fn create_user(&self, _session: &SessionContext, user: &UserInput) -> Result<(), ApiError> {
        self.record(format!("POST /auth/register {}", user.email));
        Ok(())
    }

    async fn patch_user_role(
        &self,
        _session: &SessionContext,
        user_id: &str,
        is_admin: bool,
    ) -> Result<(), ApiError> {
        self.record(format!("PATCH /admin/users/{user_id} {is_admin}"));
        Ok(())
    }

    async fn delete_user(&self, _session: &SessionContext, user_id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /admin/users/{user_id}"));
        Ok(())
    }

    async fn create_room(
        &self,
        _session: &SessionContext,
        room: &RoomInput,
    ) -> Result<Room, ApiError> {
        self.record("POST /rooms");
        Ok(Room {
            id: String::from("new-room"),
            title: room.title.clone(),
            description: room.description.clone(),
            price: room.price,
            room_type: room.room_type,
            images: room.images.clone(),
            is_available: true,
        })
    }

    async fn update_room(
        &self,
        _session: &SessionContext,
        room_id: &str,
        room: &RoomInput,
    ) -> Result<Room, ApiError> {
        self.record(format!("PUT /rooms/{room_id}"));
        Ok(Room {
            id: room_id.to_string(),
            title: room.title.clone(),
            description: room.description.clone(),
            price: room.price,
            room_type: room.room_type,
            images: room.images.clone(),
            is_available: true,
        })
    }

    async fn delete_room(&self, _session: &SessionContext, room_id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /rooms/{room_id}"));
        Ok(())
    }

    async fn get_profile(&self, _session: &SessionContext) -> Result<User, ApiError> {
        self.record("GET /profile");
        Ok(create_test_user("me", false))
    }
}
