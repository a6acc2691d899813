//! Per-resource state slots with optional request sequencing.
//!
//! Every remote resource (summary, categories, quick stats) owns one
//! [`Slot`]: its last applied value, the number of requests in flight and
//! the tickets needed to decide whether a late response may still be applied.

use std::error::Error as _;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use libdash_domain::error::LibdashError;

use crate::error_board::{ErrorBoard, Resource};

/// What to do with a response that completes after a newer request of the
/// same resource has already completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Apply every response in completion order; the last one to arrive wins.
    #[default]
    LastCompletionWins,
    /// Drop responses older than the newest request that already settled.
    LatestRequestWins,
}

/// Issuance number of a request against one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Last applied value of one resource plus its in-flight bookkeeping.
#[derive(Debug)]
pub struct Slot<T> {
    value: Option<T>,
    policy: StalePolicy,
    issued: u64,
    settled: u64,
    in_flight: usize,
}

impl<T> Slot<T> {
    #[must_use]
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            value: None,
            policy,
            issued: 0,
            settled: 0,
            in_flight: 0,
        }
    }

    /// Register a new request and hand out its ticket.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.in_flight += 1;
        Ticket(self.issued)
    }

    /// Mark the request behind `ticket` as finished.
    ///
    /// Returns `true` when its outcome should be applied under the slot's
    /// [`StalePolicy`].
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        let fresh = match self.policy {
            StalePolicy::LastCompletionWins => true,
            StalePolicy::LatestRequestWins => ticket.0 > self.settled,
        };
        if fresh {
            self.settled = self.settled.max(ticket.0);
        }
        fresh
    }

    /// Forget a request that was dropped before completing.
    pub fn abandon(&mut self, _ticket: Ticket) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Replace the whole value.
    pub fn replace(&mut self, value: T) {
        self.value = Some(value);
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

pub(crate) type SharedSlot<T> = Arc<Mutex<Slot<T>>>;

pub(crate) fn shared<T>(policy: StalePolicy) -> SharedSlot<T> {
    Arc::new(Mutex::new(Slot::new(policy)))
}

/// Lock a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps the in-flight count honest when a request future is dropped early.
struct Pending<'a, T> {
    slot: &'a Mutex<Slot<T>>,
    ticket: Option<Ticket>,
}

impl<'a, T> Pending<'a, T> {
    fn settle(mut self) -> (bool, MutexGuard<'a, Slot<T>>) {
        let mut slot = lock(self.slot);
        let fresh = self.ticket.take().is_some_and(|ticket| slot.settle(ticket));
        (fresh, slot)
    }
}

impl<T> Drop for Pending<'_, T> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            lock(self.slot).abandon(ticket);
        }
    }
}

/// Run `request` against `slot`: replace the value on a fresh success, raise
/// `failure` on the board for a fresh error, ignore stale outcomes.
///
/// The result is always handed back to the caller, stale or not.
pub(crate) async fn track<T, F>(
    slot: &Mutex<Slot<T>>,
    errors: &ErrorBoard,
    resource: Resource,
    failure: &'static str,
    request: F,
) -> Result<T, LibdashError>
where
    T: Clone,
    F: Future<Output = Result<T, LibdashError>>,
{
    let pending = Pending {
        slot,
        ticket: Some(lock(slot).begin()),
    };
    let result = request.await;

    let fresh = {
        let (fresh, mut slot) = pending.settle();
        if let (true, Ok(value)) = (fresh, &result) {
            slot.replace(value.clone());
        }
        fresh
    };

    match &result {
        _ if !fresh => tracing::debug!(?resource, "discarding stale response"),
        Err(err) => {
            tracing::warn!(error = %err, cause = ?err.source(), ?resource, "{failure}");
            errors.raise(resource, failure);
        }
        Ok(_) => {}
    }
    result
}
