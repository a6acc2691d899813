//! In-memory test doubles for the ports.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use tokio::sync::oneshot;

use libdash_domain::category::{Category, CategoryInput};
use libdash_domain::error::LibdashError;
use libdash_domain::id::CategoryId;
use libdash_domain::stats::{DashboardStats, QuickStats};

use crate::ports::{LibraryApi, QuickStatsSource};
use crate::slot::lock;

/// A request received by [`FakeLibraryApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ApiCall {
    FetchSummary,
    ListCategories,
    CreateCategory(CategoryInput),
    UpdateCategory(CategoryId, CategoryInput),
    ArchiveCategory(CategoryId),
}

/// A scripted response, optionally held back until a gate is released.
struct Scripted<T> {
    result: Result<T, LibdashError>,
    gate: Option<oneshot::Receiver<()>>,
}

impl<T> Scripted<T> {
    fn ready(result: Result<T, LibdashError>) -> Self {
        Self { result, gate: None }
    }

    fn gated(result: Result<T, LibdashError>) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                result,
                gate: Some(rx),
            },
            tx,
        )
    }

    async fn resolve(self) -> Result<T, LibdashError> {
        if let Some(gate) = self.gate {
            let _ = gate.await;
        }
        self.result
    }
}

/// Records every call and answers from per-operation queues.
///
/// Empty queues answer with an empty success.
#[derive(Default)]
pub(crate) struct FakeLibraryApi {
    calls: Mutex<Vec<ApiCall>>,
    summaries: Mutex<VecDeque<Scripted<DashboardStats>>>,
    categories: Mutex<VecDeque<Scripted<Vec<Category>>>>,
    writes: Mutex<VecDeque<Scripted<Option<Category>>>>,
    archives: Mutex<VecDeque<Scripted<()>>>,
}

impl FakeLibraryApi {
    pub(crate) fn offline() -> LibdashError {
        LibdashError::Transport("connection refused".into())
    }

    pub(crate) fn push_summary(&self, result: Result<DashboardStats, LibdashError>) {
        lock(&self.summaries).push_back(Scripted::ready(result));
    }

    /// Queue a summary that is only delivered once the returned sender fires.
    pub(crate) fn gate_summary(
        &self,
        result: Result<DashboardStats, LibdashError>,
    ) -> oneshot::Sender<()> {
        let (scripted, release) = Scripted::gated(result);
        lock(&self.summaries).push_back(scripted);
        release
    }

    pub(crate) fn push_categories(&self, result: Result<Vec<Category>, LibdashError>) {
        lock(&self.categories).push_back(Scripted::ready(result));
    }

    /// Queue the answer to the next create or update.
    pub(crate) fn push_write(&self, result: Result<Option<Category>, LibdashError>) {
        lock(&self.writes).push_back(Scripted::ready(result));
    }

    pub(crate) fn gate_write(
        &self,
        result: Result<Option<Category>, LibdashError>,
    ) -> oneshot::Sender<()> {
        let (scripted, release) = Scripted::gated(result);
        lock(&self.writes).push_back(scripted);
        release
    }

    pub(crate) fn push_archive(&self, result: Result<(), LibdashError>) {
        lock(&self.archives).push_back(Scripted::ready(result));
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        lock(&self.calls).clone()
    }

    /// Yield until at least `count` calls were received.
    pub(crate) async fn wait_for_calls(&self, count: usize) {
        while lock(&self.calls).len() < count {
            tokio::task::yield_now().await;
        }
    }

    fn answer<T: Default>(
        &self,
        call: ApiCall,
        queue: &Mutex<VecDeque<Scripted<T>>>,
    ) -> Scripted<T> {
        lock(&self.calls).push(call);
        lock(queue)
            .pop_front()
            .unwrap_or_else(|| Scripted::ready(Ok(T::default())))
    }
}

impl LibraryApi for FakeLibraryApi {
    fn fetch_summary(&self) -> impl Future<Output = Result<DashboardStats, LibdashError>> + Send {
        self.answer(ApiCall::FetchSummary, &self.summaries)
            .resolve()
    }

    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, LibdashError>> + Send {
        self.answer(ApiCall::ListCategories, &self.categories)
            .resolve()
    }

    fn create_category(
        &self,
        input: &CategoryInput,
    ) -> impl Future<Output = Result<Option<Category>, LibdashError>> + Send {
        self.answer(ApiCall::CreateCategory(input.clone()), &self.writes)
            .resolve()
    }

    fn update_category(
        &self,
        id: CategoryId,
        input: &CategoryInput,
    ) -> impl Future<Output = Result<Option<Category>, LibdashError>> + Send {
        self.answer(ApiCall::UpdateCategory(id, input.clone()), &self.writes)
            .resolve()
    }

    fn archive_category(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<(), LibdashError>> + Send {
        self.answer(ApiCall::ArchiveCategory(id), &self.archives)
            .resolve()
    }
}

/// A quick stats source that always fails.
pub(crate) struct UnavailableQuickStats;

impl QuickStatsSource for UnavailableQuickStats {
    async fn today(&self) -> Result<QuickStats, LibdashError> {
        Err(FakeLibraryApi::offline())
    }
}

pub(crate) fn stats(total_books: u64, available_books: u64) -> DashboardStats {
    DashboardStats {
        total_books,
        available_books,
        ..DashboardStats::default()
    }
}

pub(crate) fn category(id: i64, name: &str) -> Category {
    Category::new(CategoryId::new(id), name)
}
