//! Aggregate dashboard counters and same-day activity counters.

use serde::{Deserialize, Serialize};

/// Library-wide summary returned by the dashboard summary endpoint.
///
/// `available_books <= total_books` is expected from the server but not
/// enforced here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_books: u64,
    #[serde(default)]
    pub available_books: u64,
    #[serde(default)]
    pub active_borrowers: u64,
    #[serde(default)]
    pub total_transactions: u64,
}

impl DashboardStats {
    /// Books currently out on loan. Never negative, even when the server
    /// reports more available books than it owns.
    #[must_use]
    pub fn borrowed_books(&self) -> u64 {
        self.total_books.saturating_sub(self.available_books)
    }
}

/// Same-day activity counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStats {
    pub books_added: u64,
    pub books_borrowed: u64,
    pub books_returned: u64,
}
