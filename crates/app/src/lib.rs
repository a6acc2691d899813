//! # libdash-app
//!
//! Application layer — dashboard state and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `LibraryApi` — summary, category list and category writes
//!   - `QuickStatsSource` — same-day activity counters
//!   - `Confirmation` — operator approval before destructive actions
//! - Hold per-resource state:
//!   - `StatsFetcher` — aggregate dashboard summary
//!   - `CategoryStore` — category list, form and create/update/archive
//!   - `QuickStatsFetcher` — today's counters
//! - Reduce per-resource failures to one visible message (`ErrorBoard`)
//! - Compose everything in `Dashboard` and expose a `DashboardView` snapshot
//!
//! ## Dependency rule
//! Depends on `libdash-domain` only (plus `tokio` for `join!`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod dashboard;
pub mod error_board;
pub mod form;
pub mod placeholder_quick_stats;
pub mod ports;
pub mod services;
pub mod slot;

#[cfg(test)]
mod testing;
