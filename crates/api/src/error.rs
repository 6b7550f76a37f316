// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use hotel_booking::CoreError;
use hotel_booking_domain::DomainError;
use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The session is missing or no longer valid.
    Unauthenticated {
        /// Why the session was rejected.
        reason: String,
    },
    /// The caller's role does not permit the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated { reason } => write!(f, "Not signed in: {reason}"),
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Errors surfaced to callers of this crate.
///
/// Callers branch on the variant, never on message text. Nothing here is
/// fatal; every operation can simply be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Client-side validation failed. Never sent to the backend.
    #[error("{message}")]
    Validation {
        /// Wire names of the offending fields, if known.
        fields: Vec<String>,
        /// A human-readable description of the problem.
        message: String,
    },
    /// The caller may not perform the action, either by local role check or
    /// a `403` from the backend.
    #[error("You do not have permission to {action}")]
    Forbidden {
        /// The action that was attempted.
        action: String,
    },
    /// The session is missing, expired or was rejected with `401`.
    ///
    /// The session owner should sign the user out.
    #[error("Authentication required: {reason}")]
    Unauthenticated {
        /// Why the session was rejected.
        reason: String,
    },
    /// Every source of an aggregated fetch failed.
    #[error("The booking service is unreachable")]
    UnreachableBackend,
    /// The backend refused an otherwise valid request, e.g. a double booking.
    #[error("{message}")]
    RemoteRejection {
        /// HTTP status returned by the backend.
        status: u16,
        /// The backend's message, passed through verbatim.
        message: String,
    },
    /// The requested resource does not exist.
    #[error("{resource} not found")]
    NotFound {
        /// What was looked up.
        resource: String,
    },
    /// A single request could not be completed or its response not decoded.
    #[error("Request failed: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
}

impl ApiError {
    /// Returns true if the session owner should invalidate the session.
    #[must_use]
    pub const fn invalidates_session(&self) -> bool {
        matches!(self, Self::Unauthenticated { .. })
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated { reason } => Self::Unauthenticated { reason },
            AuthError::Unauthorized { action, .. } => Self::Forbidden { action },
        }
    }
}

fn validation(field: &str, err: &DomainError) -> ApiError {
    ApiError::Validation {
        fields: vec![field.to_string()],
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
/// Every domain error is a client-side validation failure.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::InvalidRange { .. } => ApiError::Validation {
            fields: vec![String::from("start_date"), String::from("end_date")],
            message: err.to_string(),
        },
        DomainError::DateParseError { .. } | DomainError::DateFormatError { .. } => {
            validation("date", &err)
        }
        DomainError::InvalidNightlyRate(_) => validation("price", &err),
        DomainError::InvalidGuestCount { .. } => validation("num_guests", &err),
        DomainError::InvalidPaymentMethod(_) => validation("payment_method", &err),
        DomainError::InvalidRoomType(_) => validation("type", &err),
        DomainError::InvalidRoomTitle(_) => validation("title", &err),
        DomainError::InvalidRoomImage(_) => validation("images", &err),
        DomainError::InvalidEmail(_) => validation("email", &err),
        DomainError::InvalidPassword(_) => validation("password", &err),
        DomainError::InvalidBookingStatus { .. } | DomainError::InvalidStatusTransition { .. } => {
            validation("status", &err)
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::MissingFields(_) | CoreError::InvalidField { .. } => ApiError::Validation {
            fields: err.fields().into_iter().map(String::from).collect(),
            message: err.to_string(),
        },
    }
}
