// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hotel_booking::BookingRequest;
use hotel_booking_api::{ApiError, BookingConfirmation, BookingGateway, SessionContext};
use hotel_booking_domain::{Booking, BookingStatus, Room, RoomInput, User, UserInput};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, error_message};

#[derive(Serialize)]
struct StatusPatch {
    status: BookingStatus,
}

#[derive(Serialize)]
struct RolePatch {
    is_admin: bool,
}

/// [`BookingGateway`] over the backend's JSON REST interface.
///
/// Each call is sent exactly once. Timeouts come from [`GatewayConfig`].
#[derive(Debug, Clone)]
pub struct HttpBookingGateway {
    client: Client,
    base_url: Url,
}

impl HttpBookingGateway {
    /// Creates a gateway for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed or cannot carry a
    /// path, or the HTTP client cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let base_url: Url =
            Url::parse(config.base_url()).map_err(|e| GatewayError::InvalidUrl {
                url: config.base_url().to_string(),
                message: e.to_string(),
            })?;

        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidUrl {
                url: config.base_url().to_string(),
                message: String::from("URL cannot carry a path"),
            });
        }

        let client: Client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(GatewayError::Client)?;

        Ok(Self { client, base_url })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url: Url = self.base_url.clone();
        // Checked in `new`: the base URL can carry path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
        session: Option<&SessionContext>,
    ) -> RequestBuilder {
        let builder: RequestBuilder = self.client.request(method, self.url(segments));
        match session {
            Some(session) => builder.bearer_auth(session.token()),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, GatewayError> {
        let request = builder.build().map_err(GatewayError::Client)?;
        let method: Method = request.method().clone();
        let path: String = request.url().path().to_string();

        debug!(%method, path = %path, "Sending request");

        let response: Response = self
            .client
            .execute(request)
            .await
            .map_err(|source| GatewayError::Request {
                path: path.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: String = response.text().await.unwrap_or_default();
        let message: String = error_message(&body, status.canonical_reason().unwrap_or("error"));
        warn!(%method, path = %path, status = status.as_u16(), message = %message, "Request rejected");

        Err(GatewayError::Status {
            path,
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let path: String = response.url().path().to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| GatewayError::Request {
                path: path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode {
            path,
            message: e.to_string(),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response: Response = self.execute(builder).await?;
        Self::decode(response).await.map_err(ApiError::from)
    }

    /// Fetches a JSON array, decoding each record on its own.
    ///
    /// A record that does not decode is logged and skipped so one bad entry
    /// cannot empty the whole collection.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Vec<T>, ApiError> {
        let response: Response = self.execute(builder).await?;
        let path: String = response.url().path().to_string();
        let records: Vec<serde_json::Value> = Self::decode(response).await?;
        let total: usize = records.len();

        let decoded: Vec<T> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<T>(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(path = %path, index, error = %e, "Skipping malformed record");
                    None
                }
            })
            .collect();

        if decoded.len() < total {
            debug!(path = %path, total, kept = decoded.len(), "Collection decoded with gaps");
        }
        Ok(decoded)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute(builder).await?;
        Ok(())
    }
}

/// Reads the post-change status from a patch response.
///
/// Accepts either the booking itself or a `{ booking: {...} }` wrapper.
/// Returns `None` when the body names no recognizable status.
fn reported_status(body: &[u8]) -> Option<BookingStatus> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let status: &serde_json::Value = value
        .get("status")
        .or_else(|| value.get("booking").and_then(|b| b.get("status")))?;
    status.as_str()?.parse().ok()
}

impl BookingGateway for HttpBookingGateway {
    async fn list_rooms(&self, session: Option<&SessionContext>) -> Result<Vec<Room>, ApiError> {
        self.fetch_list(self.request(Method::GET, &["rooms"], session))
            .await
    }

    async fn get_room(&self, session: &SessionContext, room_id: &str) -> Result<Room, ApiError> {
        self.fetch(self.request(Method::GET, &["rooms", room_id], Some(session)))
            .await
    }

    async fn create_booking(
        &self,
        session: &SessionContext,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ApiError> {
        self.fetch(
            self.request(Method::POST, &["book"], Some(session))
                .json(request),
        )
        .await
    }

    async fn list_my_bookings(&self, session: &SessionContext) -> Result<Vec<Booking>, ApiError> {
        self.fetch_list(self.request(Method::GET, &["bookings"], Some(session)))
            .await
    }

    async fn admin_list_bookings(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<Booking>, ApiError> {
        self.fetch_list(self.request(Method::GET, &["admin", "bookings"], Some(session)))
            .await
    }

    async fn patch_booking_status(
        &self,
        session: &SessionContext,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<BookingStatus, ApiError> {
        let builder: RequestBuilder = self
            .request(
                Method::PATCH,
                &["admin", "bookings", booking_id],
                Some(session),
            )
            .json(&StatusPatch { status });
        let response: Response = self.execute(builder).await?;
        let body = response.bytes().await.map_err(|e| ApiError::Transport {
            message: e.to_string(),
        })?;

        // An acknowledgement without a status means the request was applied as sent.
        Ok(reported_status(&body).unwrap_or(status))
    }

    async fn admin_list_users(&self, session: &SessionContext) -> Result<Vec<User>, ApiError> {
        self.fetch_list(self.request(Method::GET, &["admin", "users"], Some(session)))
            .await
    }

    async fn create_user(&self, session: &SessionContext, user: &UserInput) -> Result<(), ApiError> {
        self.send(
            self.request(Method::POST, &["auth", "register"], Some(session))
                .json(user),
        )
        .await
    }

    async fn patch_user_role(
        &self,
        session: &SessionContext,
        user_id: &str,
        is_admin: bool,
    ) -> Result<(), ApiError> {
        self.send(
            self.request(Method::PATCH, &["admin", "users", user_id], Some(session))
                .json(&RolePatch { is_admin }),
        )
        .await
    }

    async fn delete_user(&self, session: &SessionContext, user_id: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &["admin", "users", user_id], Some(session)))
            .await
    }

    async fn create_room(&self, session: &SessionContext, room: &RoomInput) -> Result<Room, ApiError> {
        self.fetch(
            self.request(Method::POST, &["rooms"], Some(session))
                .json(room),
        )
        .await
    }

    async fn update_room(
        &self,
        session: &SessionContext,
        room_id: &str,
        room: &RoomInput,
    ) -> Result<Room, ApiError> {
        self.fetch(
            self.request(Method::PUT, &["rooms", room_id], Some(session))
                .json(room),
        )
        .await
    }

    async fn delete_room(&self, session: &SessionContext, room_id: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &["rooms", room_id], Some(session)))
            .await
    }

    async fn get_profile(&self, session: &SessionContext) -> Result<User, ApiError> {
        self.fetch(self.request(Method::GET, &["profile"], Some(session)))
            .await
    }
}
