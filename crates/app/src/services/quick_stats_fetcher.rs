//! Quick stats fetcher — today's activity counters.

use std::sync::Arc;

use libdash_domain::error::LibdashError;
use libdash_domain::stats::QuickStats;

use crate::error_board::{ErrorBoard, Resource};
use crate::ports::QuickStatsSource;
use crate::slot::{self, SharedSlot, StalePolicy};

/// Message raised when the counters cannot be loaded.
pub const FETCH_QUICK_STATS_FAILED: &str = "Failed to fetch today's activity";

/// Loads [`QuickStats`] from a [`QuickStatsSource`].
pub struct QuickStatsFetcher<Q> {
    source: Arc<Q>,
    slot: SharedSlot<QuickStats>,
    errors: Arc<ErrorBoard>,
}

impl<Q> Clone for QuickStatsFetcher<Q> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            slot: Arc::clone(&self.slot),
            errors: Arc::clone(&self.errors),
        }
    }
}

impl<Q: QuickStatsSource> QuickStatsFetcher<Q> {
    pub fn new(source: Arc<Q>, errors: Arc<ErrorBoard>, policy: StalePolicy) -> Self {
        Self {
            source,
            slot: slot::shared(policy),
            errors,
        }
    }

    /// Fetch today's counters.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the source; the previous counters are
    /// kept and [`FETCH_QUICK_STATS_FAILED`] is raised on the error board.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self) -> Result<QuickStats, LibdashError> {
        slot::track(
            &self.slot,
            &self.errors,
            Resource::QuickStats,
            FETCH_QUICK_STATS_FAILED,
            self.source.today(),
        )
        .await
    }

    #[must_use]
    pub fn current(&self) -> Option<QuickStats> {
        slot::lock(&self.slot).value().copied()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        slot::lock(&self.slot).is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder_quick_stats::PlaceholderQuickStats;
    use crate::testing::UnavailableQuickStats;

    #[tokio::test]
    async fn should_load_placeholder_counters() {
        let fetcher = QuickStatsFetcher::new(
            Arc::new(PlaceholderQuickStats::default()),
            Arc::new(ErrorBoard::new()),
            StalePolicy::default(),
        );

        let fetched = fetcher.fetch().await.unwrap();

        assert_eq!(fetcher.current(), Some(fetched));
        assert_eq!(fetched, PlaceholderQuickStats::default().stats());
    }

    #[tokio::test]
    async fn should_raise_error_when_source_fails() {
        let errors = Arc::new(ErrorBoard::new());
        let fetcher = QuickStatsFetcher::new(
            Arc::new(UnavailableQuickStats),
            Arc::clone(&errors),
            StalePolicy::default(),
        );

        assert!(fetcher.fetch().await.is_err());
        assert!(fetcher.current().is_none());
        assert_eq!(
            errors.get(Resource::QuickStats).as_deref(),
            Some("Failed to fetch today's activity")
        );
    }
}
