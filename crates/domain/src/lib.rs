//! # libdash-domain
//!
//! Pure domain model for the library administration dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Categories** (server-owned records grouping books) and the
//!   **CategoryInput** body used to create or update them
//! - Define **DashboardStats** (aggregate book/borrower counts) and
//!   **QuickStats** (same-day activity counters)
//! - Compute **StockMetrics** (availability, usage rate and their labels)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod category;
pub mod metrics;
pub mod stats;
