//! Quick stats port — source of same-day activity counters.

use std::future::Future;

use libdash_domain::error::LibdashError;
use libdash_domain::stats::QuickStats;

/// Supplies today's added/borrowed/returned counters.
///
/// The only implementation today is
/// [`PlaceholderQuickStats`](crate::placeholder_quick_stats::PlaceholderQuickStats);
/// a real source plugs in here without touching the dashboard core.
pub trait QuickStatsSource: Send + Sync {
    fn today(&self) -> impl Future<Output = Result<QuickStats, LibdashError>> + Send;
}
