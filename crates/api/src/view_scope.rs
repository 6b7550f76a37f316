// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Discarding results that resolve after their view has moved on.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Tracks which load a view currently cares about.
///
/// Each load takes a [`ViewTicket`]. Starting a newer load, or tearing the
/// view down, invalidates every earlier ticket, and results delivered against
/// an invalid ticket are dropped.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    generation: Arc<AtomicU64>,
}

/// Ties one in-flight fetch to the load that issued it.
#[derive(Debug, Clone)]
pub struct ViewTicket {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl ViewScope {
    /// Creates a scope with no load in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load, superseding any earlier one.
    #[must_use]
    pub fn begin(&self) -> ViewTicket {
        let issued: u64 = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        ViewTicket {
            generation: Arc::clone(&self.generation),
            issued,
        }
    }

    /// Tears the view down. Every outstanding ticket becomes stale.
    pub fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

impl ViewTicket {
    /// Returns true while no newer load or teardown has happened.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.issued
    }

    /// Hands `value` back only if this ticket is still current.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_current() {
            Some(value)
        } else {
            debug!(ticket = self.issued, "Discarding result for stale view");
            None
        }
    }

    /// Awaits `fetch` and keeps its output only if the ticket is still current
    /// once it resolves.
    pub async fn run<F: Future>(&self, fetch: F) -> Option<F::Output> {
        let value: F::Output = fetch.await;
        self.accept(value)
    }
}
