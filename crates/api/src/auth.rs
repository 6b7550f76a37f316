// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session context and role-based authorization.

use time::OffsetDateTime;

use crate::error::AuthError;

/// Caller roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Hotel staff with administrative authority.
    ///
    /// Admins may:
    /// - list every booking and change booking status
    /// - list users, grant or revoke the admin role, delete accounts
    /// - create, edit and delete rooms
    Admin,
    /// A registered guest. Guests may browse rooms, book, and view their own
    /// bookings and profile.
    Guest,
}

impl Role {
    /// Derives the role from the backend's `is_admin` flag.
    #[must_use]
    pub const fn from_is_admin(is_admin: bool) -> Self {
        if is_admin { Self::Admin } else { Self::Guest }
    }

    /// Returns the role's display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Guest => "Guest",
        }
    }
}

/// The caller's authentication state, passed explicitly to every operation.
///
/// The session is owned by whatever signed the user in; this crate only
/// attaches the token to requests and never issues or refreshes it.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionContext {
    token: String,
    role: Role,
    expires_at: Option<OffsetDateTime>,
}

impl SessionContext {
    /// Creates a session without an expiry.
    #[must_use]
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
            expires_at: None,
        }
    }

    /// Returns a copy of this session that lapses at `expires_at`.
    #[must_use]
    pub const fn with_expiry(mut self, expires_at: OffsetDateTime) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the caller's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns when the session lapses, if it does.
    #[must_use]
    pub const fn expires_at(&self) -> Option<OffsetDateTime> {
        self.expires_at
    }

    /// Returns true if the session has lapsed at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|expiry| now >= expiry)
    }
}

// The token is a credential and stays out of logs.
impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Authorization service for enforcing role-based access control.
///
/// Every check runs before any request is sent, so a rejected caller never
/// reaches the network.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the session is usable at `now`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthenticated` if the token is blank or the
    /// session has expired.
    pub fn authenticate_at(session: &SessionContext, now: OffsetDateTime) -> Result<(), AuthError> {
        if session.token.trim().is_empty() {
            return Err(AuthError::Unauthenticated {
                reason: String::from("no session token"),
            });
        }
        if session.is_expired_at(now) {
            return Err(AuthError::Unauthenticated {
                reason: String::from("session expired"),
            });
        }
        Ok(())
    }

    /// Checks that the session is usable now.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthenticated` if the token is blank or the
    /// session has expired.
    pub fn authenticate(session: &SessionContext) -> Result<(), AuthError> {
        Self::authenticate_at(session, OffsetDateTime::now_utc())
    }

    fn require_admin(session: &SessionContext, action: &str) -> Result<(), AuthError> {
        Self::authenticate(session)?;
        match session.role {
            Role::Admin => Ok(()),
            Role::Guest => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: Role::Admin.as_str().to_string(),
            }),
        }
    }

    /// Checks if the caller may list every booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unusable or the caller is not an admin.
    pub fn authorize_list_all_bookings(session: &SessionContext) -> Result<(), AuthError> {
        Self::require_admin(session, "list_all_bookings")
    }

    /// Checks if the caller may change a booking's status.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unusable or the caller is not an admin.
    pub fn authorize_change_booking_status(session: &SessionContext) -> Result<(), AuthError> {
        Self::require_admin(session, "change_booking_status")
    }

    /// Checks if the caller may list, promote, demote or delete users.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unusable or the caller is not an admin.
    pub fn authorize_manage_users(session: &SessionContext) -> Result<(), AuthError> {
        Self::require_admin(session, "manage_users")
    }

    /// Checks if the caller may create, edit or delete rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unusable or the caller is not an admin.
    pub fn authorize_manage_rooms(session: &SessionContext) -> Result<(), AuthError> {
        Self::require_admin(session, "manage_rooms")
    }

    /// Checks if the caller may load the dashboard statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unusable or the caller is not an admin.
    pub fn authorize_view_dashboard(session: &SessionContext) -> Result<(), AuthError> {
        Self::require_admin(session, "view_dashboard")
    }
}
