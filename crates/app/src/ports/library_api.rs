//! Library API port — the remote collaborator behind every dashboard resource.

use std::future::Future;

use libdash_domain::category::{Category, CategoryInput};
use libdash_domain::error::LibdashError;
use libdash_domain::id::CategoryId;
use libdash_domain::stats::DashboardStats;

/// Remote library service.
///
/// Implementations collapse transport failures, `success: false` answers and
/// field-level rejections into [`LibdashError`].
pub trait LibraryApi: Send + Sync {
    /// Aggregate book and borrower counts.
    fn fetch_summary(&self) -> impl Future<Output = Result<DashboardStats, LibdashError>> + Send;

    /// Active (non-archived) categories, in server order.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, LibdashError>> + Send;

    /// Create a category. The server may or may not echo the stored record.
    fn create_category(
        &self,
        input: &CategoryInput,
    ) -> impl Future<Output = Result<Option<Category>, LibdashError>> + Send;

    /// Update an existing category.
    fn update_category(
        &self,
        id: CategoryId,
        input: &CategoryInput,
    ) -> impl Future<Output = Result<Option<Category>, LibdashError>> + Send;

    /// Soft-delete a category.
    fn archive_category(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<(), LibdashError>> + Send;
}
