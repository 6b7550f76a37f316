// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fail-soft fan-out over independent backend collections.

use std::future::Future;

use hotel_booking::AdminStats;
use hotel_booking_domain::{Booking, Room, User};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::auth::{AuthorizationService, SessionContext};
use crate::error::ApiError;
use crate::gateway::BookingGateway;
use crate::view_scope::{ViewScope, ViewTicket};

/// The settled outcome of one named fetch.
#[derive(Debug)]
pub struct SourceResult<T> {
    /// Name of the source, for logs and reporting.
    pub source: &'static str,
    /// What the fetch produced.
    pub outcome: Result<T, ApiError>,
}

impl<T> SourceResult<T> {
    /// Returns the source name if the fetch failed.
    #[must_use]
    pub const fn failed(&self) -> Option<&'static str> {
        match self.outcome {
            Ok(_) => None,
            Err(_) => Some(self.source),
        }
    }
}

impl<T: Default> SourceResult<T> {
    /// Returns the fetched value, or the neutral default if the fetch failed.
    pub fn into_value_or_default(self) -> T {
        self.outcome.unwrap_or_default()
    }
}

/// Awaits one fetch and captures its failure instead of propagating it.
pub async fn settle<T, F>(source: &'static str, fetch: F) -> SourceResult<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let outcome: Result<T, ApiError> = fetch.await;
    match &outcome {
        Ok(_) => debug!(source, "Source fetched"),
        Err(err) => warn!(source, error = %err, "Source failed, substituting empty result"),
    }
    SourceResult { source, outcome }
}

/// Dashboard statistics plus the sources that had to be skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminDashboard {
    /// Figures reduced from the sources that answered.
    pub stats: AdminStats,
    /// Sources that failed and contributed nothing.
    pub failed_sources: Vec<&'static str>,
}

impl AdminDashboard {
    /// Returns true if any source was skipped.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.failed_sources.is_empty()
    }
}

/// Loads bookings, rooms and users concurrently and reduces them to
/// dashboard statistics.
///
/// The three fetches run together and the join completes only after every
/// one has settled. A failed source counts as empty; the summary is returned
/// as long as at least one source answered, even with an empty list. Only
/// when all three fail is a single `UnreachableBackend` reported.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an admin (checked before any fetch)
/// - Every source failed
pub async fn collect_admin_stats<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
) -> Result<AdminDashboard, ApiError> {
    AuthorizationService::authorize_view_dashboard(session)?;

    let (bookings, rooms, users) = futures::join!(
        settle::<Vec<Booking>, _>("bookings", gateway.admin_list_bookings(session)),
        settle::<Vec<Room>, _>("rooms", gateway.list_rooms(Some(session))),
        settle::<Vec<User>, _>("users", gateway.admin_list_users(session)),
    );

    let failed_sources: Vec<&'static str> = [bookings.failed(), rooms.failed(), users.failed()]
        .into_iter()
        .flatten()
        .collect();

    if failed_sources.len() == 3 {
        error!(?failed_sources, "Every dashboard source failed");
        return Err(ApiError::UnreachableBackend);
    }

    let stats: AdminStats = AdminStats::from_collections(
        &bookings.into_value_or_default(),
        &rooms.into_value_or_default(),
        &users.into_value_or_default(),
    );

    debug!(
        total_bookings = stats.total_bookings,
        total_rooms = stats.total_rooms,
        active_bookings = stats.active_bookings,
        total_users = stats.total_users,
        degraded = !failed_sources.is_empty(),
        "Dashboard statistics reduced"
    );

    Ok(AdminDashboard {
        stats,
        failed_sources,
    })
}

/// Reloads the dashboard for a view that may move on while the fetches are in
/// flight.
///
/// The load supersedes any earlier one started from the same `scope`. If a
/// newer load or a teardown happens before every source settles, the outcome
/// is discarded and `Ok(None)` is returned, errors included.
///
/// # Errors
///
/// Returns the error from [`collect_admin_stats`] when the view is still
/// current.
pub async fn refresh_admin_dashboard<G: BookingGateway>(
    gateway: &G,
    session: &SessionContext,
    scope: &ViewScope,
) -> Result<Option<AdminDashboard>, ApiError> {
    let ticket: ViewTicket = scope.begin();
    ticket
        .run(collect_admin_stats(gateway, session))
        .await
        .transpose()
}
