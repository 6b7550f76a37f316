// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hotel_booking_api::ApiError;
use thiserror::Error;

/// Failures talking to the backend over HTTP.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The configured base URL cannot be used.
    #[error("Invalid backend URL '{url}': {message}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request never produced a response.
    #[error("Request to {path} failed: {source}")]
    Request {
        /// Request path.
        path: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status.
    #[error("{path} returned {status}: {message}")]
    Status {
        /// Request path.
        path: String,
        /// HTTP status code.
        status: u16,
        /// The backend's error message.
        message: String,
    },
    /// The response body did not have the expected shape.
    #[error("Could not decode response from {path}: {message}")]
    Decode {
        /// Request path.
        path: String,
        /// Decoder message.
        message: String,
    },
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Status {
                path,
                status,
                message,
            } => match status {
                401 => Self::Unauthenticated { reason: message },
                403 => Self::Forbidden { action: path },
                404 => Self::NotFound { resource: path },
                _ => Self::RemoteRejection { status, message },
            },
            other @ (GatewayError::InvalidUrl { .. }
            | GatewayError::Client(_)
            | GatewayError::Request { .. }
            | GatewayError::Decode { .. }) => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

/// Picks the human-readable message out of an error body.
///
/// The backend sends `{ "error": "..." }` or `{ "message": "..." }`; anything
/// else is passed through as raw text, and an empty body falls back to
/// `fallback`.
#[must_use]
pub fn error_message(body: &str, fallback: &str) -> String {
    let from_json: Option<String> = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(String::from))
        });

    match from_json {
        Some(message) => message,
        None if body.trim().is_empty() => fallback.to_string(),
        None => body.trim().to_string(),
    }
}
