//! Placeholder quick stats — fixed same-day counters.
//!
//! No data source for same-day activity exists yet, so the dashboard shows
//! constant counters supplied at construction time.

use std::future::Future;

use libdash_domain::error::LibdashError;
use libdash_domain::stats::QuickStats;

use crate::ports::QuickStatsSource;

/// A [`QuickStatsSource`] that always returns the same counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderQuickStats {
    stats: QuickStats,
}

impl PlaceholderQuickStats {
    #[must_use]
    pub fn new(stats: QuickStats) -> Self {
        Self { stats }
    }

    #[must_use]
    pub fn stats(&self) -> QuickStats {
        self.stats
    }
}

impl Default for PlaceholderQuickStats {
    fn default() -> Self {
        Self::new(QuickStats {
            books_added: 12,
            books_borrowed: 8,
            books_returned: 5,
        })
    }
}

impl QuickStatsSource for PlaceholderQuickStats {
    fn today(&self) -> impl Future<Output = Result<QuickStats, LibdashError>> + Send {
        let stats = self.stats;
        async move { Ok(stats) }
    }
}
