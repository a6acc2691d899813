//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod confirmation;
pub mod library_api;
pub mod quick_stats;

pub use confirmation::Confirmation;
pub use library_api::LibraryApi;
pub use quick_stats::QuickStatsSource;
