//! Application services — use-case implementations.
//!
//! Each service owns the slot of one remote resource and reaches the outside
//! world only through port traits, keeping this layer decoupled from
//! concrete adapters.

pub mod category_store;
pub mod quick_stats_fetcher;
pub mod stats_fetcher;
