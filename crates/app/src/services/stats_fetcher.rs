//! Stats fetcher — the aggregate dashboard summary.

use std::sync::Arc;

use libdash_domain::error::LibdashError;
use libdash_domain::stats::DashboardStats;

use crate::error_board::{ErrorBoard, Resource};
use crate::ports::LibraryApi;
use crate::slot::{self, SharedSlot, StalePolicy};

/// Message raised when the summary cannot be loaded.
pub const FETCH_SUMMARY_FAILED: &str = "Failed to fetch dashboard data";

/// Loads [`DashboardStats`] and keeps the last good value.
pub struct StatsFetcher<A> {
    api: Arc<A>,
    slot: SharedSlot<DashboardStats>,
    errors: Arc<ErrorBoard>,
}

impl<A> Clone for StatsFetcher<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            slot: Arc::clone(&self.slot),
            errors: Arc::clone(&self.errors),
        }
    }
}

impl<A: LibraryApi> StatsFetcher<A> {
    /// Create a fetcher sharing `api` and `errors` with the other services.
    pub fn new(api: Arc<A>, errors: Arc<ErrorBoard>, policy: StalePolicy) -> Self {
        Self {
            api,
            slot: slot::shared(policy),
            errors,
        }
    }

    /// Fetch the summary, replacing the held value on success.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the [`LibraryApi`]; the previous value
    /// is kept and [`FETCH_SUMMARY_FAILED`] is raised on the error board.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self) -> Result<DashboardStats, LibdashError> {
        slot::track(
            &self.slot,
            &self.errors,
            Resource::Summary,
            FETCH_SUMMARY_FAILED,
            self.api.fetch_summary(),
        )
        .await
    }

    /// Last successfully applied summary.
    #[must_use]
    pub fn current(&self) -> Option<DashboardStats> {
        slot::lock(&self.slot).value().copied()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        slot::lock(&self.slot).is_loading()
    }
}
