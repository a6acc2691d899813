//! Dashboard — composes the three fetchers and the category store behind one
//! shared error board, and reduces them to a single view snapshot.

use std::sync::Arc;

use libdash_domain::category::Category;
use libdash_domain::metrics::StockMetrics;
use libdash_domain::stats::{DashboardStats, QuickStats};

use crate::error_board::ErrorBoard;
use crate::form::CategoryForm;
use crate::ports::{LibraryApi, QuickStatsSource};
use crate::services::category_store::CategoryStore;
use crate::services::quick_stats_fetcher::QuickStatsFetcher;
use crate::services::stats_fetcher::StatsFetcher;
use crate::slot::StalePolicy;

/// Behaviour switches shared by every resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardOptions {
    pub stale_responses: StalePolicy,
}

/// Everything a renderer needs, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// `None` until the first summary arrives.
    pub stats: Option<DashboardStats>,
    /// Derived from `stats`, or from an all-zero summary before it arrives.
    pub metrics: StockMetrics,
    pub categories: Vec<Category>,
    pub quick_stats: Option<QuickStats>,
    pub form: CategoryForm,
    /// The single message the dashboard shows, if any.
    pub error: Option<String>,
    pub is_loading: bool,
    pub is_submitting: bool,
}

/// The dashboard state core.
pub struct Dashboard<A, Q> {
    stats: StatsFetcher<A>,
    categories: CategoryStore<A>,
    quick_stats: QuickStatsFetcher<Q>,
    errors: Arc<ErrorBoard>,
}

impl<A, Q> Clone for Dashboard<A, Q> {
    fn clone(&self) -> Self {
        Self {
            stats: self.stats.clone(),
            categories: self.categories.clone(),
            quick_stats: self.quick_stats.clone(),
            errors: Arc::clone(&self.errors),
        }
    }
}

impl<A: LibraryApi, Q: QuickStatsSource> Dashboard<A, Q> {
    pub fn new(api: Arc<A>, quick_stats: Arc<Q>, options: DashboardOptions) -> Self {
        let policy = options.stale_responses;
        let errors = Arc::new(ErrorBoard::new());
        let stats = StatsFetcher::new(Arc::clone(&api), Arc::clone(&errors), policy);
        let categories = CategoryStore::new(api, stats.clone(), Arc::clone(&errors), policy);
        let quick_stats = QuickStatsFetcher::new(quick_stats, Arc::clone(&errors), policy);
        Self {
            stats,
            categories,
            quick_stats,
            errors,
        }
    }

    /// Initial load: summary, categories and quick stats, concurrently.
    ///
    /// Failures are recorded on the error board and never abort the other
    /// fetches.
    #[tracing::instrument(skip(self))]
    pub async fn mount(&self) {
        self.refresh().await;
    }

    /// Re-fetch every resource concurrently.
    pub async fn refresh(&self) {
        let (summary, categories, quick_stats) = tokio::join!(
            self.stats.fetch(),
            self.categories.list(),
            self.quick_stats.fetch()
        );
        tracing::debug!(
            summary_ok = summary.is_ok(),
            categories_ok = categories.is_ok(),
            quick_stats_ok = quick_stats.is_ok(),
            "dashboard refreshed"
        );
    }

    #[must_use]
    pub fn stats(&self) -> &StatsFetcher<A> {
        &self.stats
    }

    #[must_use]
    pub fn categories(&self) -> &CategoryStore<A> {
        &self.categories
    }

    #[must_use]
    pub fn quick_stats(&self) -> &QuickStatsFetcher<Q> {
        &self.quick_stats
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorBoard {
        &self.errors
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        let stats = self.stats.current();
        DashboardView {
            stats,
            metrics: StockMetrics::from(&stats.unwrap_or_default()),
            categories: self.categories.categories(),
            quick_stats: self.quick_stats.current(),
            form: self.categories.form(),
            error: self.errors.visible().map(|raised| raised.message),
            is_loading: self.stats.is_loading()
                || self.categories.is_loading()
                || self.quick_stats.is_loading(),
            is_submitting: self.categories.is_submitting(),
        }
    }
}
